//! Publisher conversions

use super::absent;
use crate::application::dto::PublisherDto;
use crate::domain::publisher::{Publisher, PublisherRecord};
use crate::support::errors::CatalogResult;

pub fn publisher_from_record(record: Option<PublisherRecord>) -> CatalogResult<Publisher> {
    let record = record.ok_or_else(absent("publisher record"))?;
    Ok(Publisher {
        id: record.id,
        name: record.name,
        slug: record.slug,
    })
}

pub fn publisher_to_record(publisher: Option<Publisher>) -> CatalogResult<PublisherRecord> {
    let publisher = publisher.ok_or_else(absent("publisher"))?;
    Ok(PublisherRecord {
        id: publisher.id,
        name: publisher.name,
        slug: publisher.slug,
    })
}

pub fn publisher_to_dto(publisher: Option<Publisher>) -> Option<PublisherDto> {
    publisher.map(|publisher| PublisherDto {
        id: publisher.id,
        name: publisher.name,
        slug: publisher.slug,
    })
}

pub fn publisher_from_dto(dto: Option<PublisherDto>) -> CatalogResult<Publisher> {
    let dto = dto.ok_or_else(absent("publisher dto"))?;
    Ok(Publisher {
        id: dto.id,
        name: dto.name,
        slug: dto.slug,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::errors::CatalogError;

    fn sample_record() -> PublisherRecord {
        PublisherRecord {
            id: Some(3),
            name: "Seix Barral".to_string(),
            slug: "seix-barral".to_string(),
        }
    }

    #[test]
    fn round_trips_preserve_every_field() {
        let record = sample_record();
        let publisher = publisher_from_record(Some(record.clone())).unwrap();
        assert_eq!(
            publisher_to_record(Some(publisher.clone())).unwrap(),
            record
        );
        let dto = publisher_to_dto(Some(publisher.clone())).unwrap();
        assert_eq!(publisher_from_dto(Some(dto)).unwrap(), publisher);
    }

    #[test]
    fn absence_contracts() {
        assert!(matches!(
            publisher_from_record(None),
            Err(CatalogError::Contract(_))
        ));
        assert!(matches!(
            publisher_to_record(None),
            Err(CatalogError::Contract(_))
        ));
        assert!(matches!(
            publisher_from_dto(None),
            Err(CatalogError::Contract(_))
        ));
        assert_eq!(publisher_to_dto(None), None);
    }
}
