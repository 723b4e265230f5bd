use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Student record as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    pub id: i32,
    pub name: String,
    pub student_number: String,
    pub age: i32,
    pub gender: String,
    pub major: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub enrollment_date: NaiveDate,
    pub created_time: DateTime<Utc>,
    pub updated_time: DateTime<Utc>,
}

/// Incoming student payload for create and update requests.
///
/// All fields are optional on the wire so that missing values reach validation
/// instead of being rejected during deserialization. Validation decides which
/// fields are required and reports every violation at once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentPayloadDto {
    pub name: Option<String>,
    pub student_number: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub major: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub enrollment_date: Option<NaiveDate>,
}

/// One page of students with pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedStudentsDto {
    pub students: Vec<StudentDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Aggregate counts over the student table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsDto {
    pub total_count: u64,
    pub count_by_major: BTreeMap<String, u64>,
    pub count_by_gender: BTreeMap<String, u64>,
}
