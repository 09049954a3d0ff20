//! Academic entity endpoints (`/api/v1/{faculties,majors,classes}/`).
//!
//! Each entity exposes a unit-struct API implementing [`ResourceApi`], so a
//! page can hand the whole capability set to a `ResourceController` by
//! value. The `*_options` helpers feed foreign-key selects in the modal
//! forms and degrade to an empty list on failure.

use super::error::ApiError;
use super::http;
use super::types::{Class, ClassInput, EntityRef, Faculty, FacultyInput, Major, MajorInput, Page};
use crate::state::resource::ResourceApi;

const FACULTIES_URL: &str = "/api/v1/faculties/";
const MAJORS_URL: &str = "/api/v1/majors/";
const CLASSES_URL: &str = "/api/v1/classes/";

/// Faculty CRUD.
#[derive(Clone, Copy, Debug, Default)]
pub struct FacultyApi;

impl ResourceApi for FacultyApi {
    type Record = Faculty;
    type CreateInput = FacultyInput;
    type UpdateInput = FacultyInput;

    const CAN_CREATE: bool = true;
    const CAN_UPDATE: bool = true;
    const CAN_DELETE: bool = true;

    async fn list(&self, params: &[(String, String)]) -> Result<Page<Faculty>, ApiError> {
        http::get_json(FACULTIES_URL, params).await
    }

    async fn create(&self, input: &FacultyInput) -> Result<Faculty, ApiError> {
        http::post_json(FACULTIES_URL, input).await
    }

    async fn update(&self, id: u64, input: &FacultyInput) -> Result<Faculty, ApiError> {
        http::patch_json(&format!("{FACULTIES_URL}{id}/"), input).await
    }

    async fn delete(&self, id: u64) -> Result<(), ApiError> {
        http::delete(&format!("{FACULTIES_URL}{id}/")).await
    }
}

/// Major CRUD.
#[derive(Clone, Copy, Debug, Default)]
pub struct MajorApi;

impl ResourceApi for MajorApi {
    type Record = Major;
    type CreateInput = MajorInput;
    type UpdateInput = MajorInput;

    const CAN_CREATE: bool = true;
    const CAN_UPDATE: bool = true;
    const CAN_DELETE: bool = true;

    async fn list(&self, params: &[(String, String)]) -> Result<Page<Major>, ApiError> {
        http::get_json(MAJORS_URL, params).await
    }

    async fn create(&self, input: &MajorInput) -> Result<Major, ApiError> {
        http::post_json(MAJORS_URL, input).await
    }

    async fn update(&self, id: u64, input: &MajorInput) -> Result<Major, ApiError> {
        http::patch_json(&format!("{MAJORS_URL}{id}/"), input).await
    }

    async fn delete(&self, id: u64) -> Result<(), ApiError> {
        http::delete(&format!("{MAJORS_URL}{id}/")).await
    }
}

/// Class CRUD.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClassApi;

impl ResourceApi for ClassApi {
    type Record = Class;
    type CreateInput = ClassInput;
    type UpdateInput = ClassInput;

    const CAN_CREATE: bool = true;
    const CAN_UPDATE: bool = true;
    const CAN_DELETE: bool = true;

    async fn list(&self, params: &[(String, String)]) -> Result<Page<Class>, ApiError> {
        http::get_json(CLASSES_URL, params).await
    }

    async fn create(&self, input: &ClassInput) -> Result<Class, ApiError> {
        http::post_json(CLASSES_URL, input).await
    }

    async fn update(&self, id: u64, input: &ClassInput) -> Result<Class, ApiError> {
        http::patch_json(&format!("{CLASSES_URL}{id}/"), input).await
    }

    async fn delete(&self, id: u64) -> Result<(), ApiError> {
        http::delete(&format!("{CLASSES_URL}{id}/")).await
    }
}

async fn options(url: &str) -> Vec<EntityRef> {
    let params = [
        ("page".to_owned(), "1".to_owned()),
        ("page_size".to_owned(), "100".to_owned()),
        ("is_active".to_owned(), "true".to_owned()),
    ];
    match http::get_json::<Page<EntityRef>>(url, &params).await {
        Ok(page) => page.results,
        Err(_) => Vec::new(),
    }
}

/// Active faculties for the major form's faculty select.
pub async fn faculty_options() -> Vec<EntityRef> {
    options(FACULTIES_URL).await
}

/// Active majors for the class form's major select.
pub async fn major_options() -> Vec<EntityRef> {
    options(MAJORS_URL).await
}
