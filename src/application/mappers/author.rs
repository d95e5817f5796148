//! Author conversions

use super::absent;
use crate::application::dto::AuthorDto;
use crate::domain::author::{Author, AuthorRecord};
use crate::support::errors::CatalogResult;

pub fn author_from_record(record: Option<AuthorRecord>) -> CatalogResult<Author> {
    let record = record.ok_or_else(absent("author record"))?;
    Ok(Author {
        id: record.id,
        name: record.name,
        nationality: record.nationality,
        biography_es: record.biography_es,
        biography_en: record.biography_en,
        birth_year: record.birth_year,
        death_year: record.death_year,
        slug: record.slug,
    })
}

pub fn author_to_record(author: Option<Author>) -> CatalogResult<AuthorRecord> {
    let author = author.ok_or_else(absent("author"))?;
    Ok(AuthorRecord {
        id: author.id,
        name: author.name,
        nationality: author.nationality,
        biography_es: author.biography_es,
        biography_en: author.biography_en,
        birth_year: author.birth_year,
        death_year: author.death_year,
        slug: author.slug,
    })
}

pub fn author_to_dto(author: Option<Author>) -> Option<AuthorDto> {
    author.map(|author| AuthorDto {
        id: author.id,
        name: author.name,
        nationality: author.nationality,
        biography_es: author.biography_es,
        biography_en: author.biography_en,
        birth_year: author.birth_year,
        death_year: author.death_year,
        slug: author.slug,
    })
}

pub fn author_from_dto(dto: Option<AuthorDto>) -> CatalogResult<Author> {
    let dto = dto.ok_or_else(absent("author dto"))?;
    Ok(Author {
        id: dto.id,
        name: dto.name,
        nationality: dto.nationality,
        biography_es: dto.biography_es,
        biography_en: dto.biography_en,
        birth_year: dto.birth_year,
        death_year: dto.death_year,
        slug: dto.slug,
    })
}
