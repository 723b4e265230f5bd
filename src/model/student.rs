//! Student domain model, payload validation, and query parameter types.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;

use crate::{
    dto::student::{PaginatedStudentsDto, StatisticsDto, StudentDto, StudentPayloadDto},
    error::AppError,
};

/// Field violations keyed by the wire name of the offending field.
pub type FieldViolations = BTreeMap<String, String>;

static STUDENT_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8,12}$").unwrap());
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^1[3-9]\d{9}$").unwrap());
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Gender of a student, stored as its Chinese label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parses the stored label, returning `None` for anything other than the
    /// two accepted values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "男" => Some(Self::Male),
            "女" => Some(Self::Female),
            _ => None,
        }
    }

    /// Returns the label persisted in the database and sent over the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }
}

/// A student record as seen by the service layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub student_number: String,
    pub age: i32,
    pub gender: Gender,
    pub major: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub enrollment_date: NaiveDate,
    pub created_time: DateTime<Utc>,
    pub updated_time: DateTime<Utc>,
}

impl Student {
    /// Converts an entity model into a domain model.
    ///
    /// Fails only when the stored gender label is not one of the accepted
    /// values, which indicates the row was written outside the application.
    pub fn from_entity(entity: entity::student::Model) -> Result<Self, AppError> {
        let gender = Gender::parse(&entity.gender).ok_or_else(|| {
            AppError::InternalError(format!("invalid gender stored for student {}", entity.id))
        })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            student_number: entity.student_number,
            age: entity.age,
            gender,
            major: entity.major,
            email: entity.email,
            phone: entity.phone,
            enrollment_date: entity.enrollment_date,
            created_time: entity.created_time,
            updated_time: entity.updated_time,
        })
    }

    /// Converts the domain model into its API representation.
    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            name: self.name,
            student_number: self.student_number,
            age: self.age,
            gender: self.gender.as_str().to_string(),
            major: self.major,
            email: self.email,
            phone: self.phone,
            enrollment_date: self.enrollment_date,
            created_time: self.created_time,
            updated_time: self.updated_time,
        }
    }
}

/// Validated parameters for creating or updating a student.
///
/// Produced from a [`StudentPayloadDto`] via `TryFrom`, which checks every
/// field and collects one message per violated field rather than stopping at
/// the first problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentData {
    pub name: String,
    pub student_number: String,
    pub age: i32,
    pub gender: Gender,
    pub major: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub enrollment_date: Option<NaiveDate>,
}

impl TryFrom<StudentPayloadDto> for StudentData {
    type Error = FieldViolations;

    fn try_from(dto: StudentPayloadDto) -> Result<Self, Self::Error> {
        let mut violations = FieldViolations::new();

        let name = match dto.name {
            Some(name) if !name.trim().is_empty() => {
                let length = name.chars().count();
                if (2..=20).contains(&length) {
                    Some(name)
                } else {
                    violations.insert(
                        "name".to_string(),
                        "name length must be between 2 and 20".to_string(),
                    );
                    None
                }
            }
            _ => {
                violations.insert("name".to_string(), "name must not be blank".to_string());
                None
            }
        };

        let student_number = match dto.student_number {
            Some(number) if !number.trim().is_empty() => {
                if STUDENT_NUMBER_PATTERN.is_match(&number) {
                    Some(number)
                } else {
                    violations.insert(
                        "studentNumber".to_string(),
                        "studentNumber must be 8 to 12 digits".to_string(),
                    );
                    None
                }
            }
            _ => {
                violations.insert(
                    "studentNumber".to_string(),
                    "studentNumber must not be blank".to_string(),
                );
                None
            }
        };

        let age = match dto.age {
            Some(age) if (16..=30).contains(&age) => Some(age),
            Some(_) => {
                violations.insert(
                    "age".to_string(),
                    "age must be between 16 and 30".to_string(),
                );
                None
            }
            None => {
                violations.insert("age".to_string(), "age is required".to_string());
                None
            }
        };

        let gender = match dto.gender.as_deref().and_then(Gender::parse) {
            Some(gender) => Some(gender),
            None => {
                violations.insert(
                    "gender".to_string(),
                    "gender must be one of: 男, 女".to_string(),
                );
                None
            }
        };

        let major = match dto.major {
            Some(major) if !major.trim().is_empty() => {
                let length = major.chars().count();
                if (2..=50).contains(&length) {
                    Some(major)
                } else {
                    violations.insert(
                        "major".to_string(),
                        "major length must be between 2 and 50".to_string(),
                    );
                    None
                }
            }
            _ => {
                violations.insert("major".to_string(), "major must not be blank".to_string());
                None
            }
        };

        let email = match dto.email {
            Some(email) if EMAIL_PATTERN.is_match(&email) => Some(email),
            Some(_) => {
                violations.insert(
                    "email".to_string(),
                    "email must be a well-formed email address".to_string(),
                );
                None
            }
            None => None,
        };

        let phone = match dto.phone {
            Some(phone) if PHONE_PATTERN.is_match(&phone) => Some(phone),
            Some(_) => {
                violations.insert(
                    "phone".to_string(),
                    "phone must be a valid mobile number".to_string(),
                );
                None
            }
            None => None,
        };

        match (name, student_number, age, gender, major) {
            (Some(name), Some(student_number), Some(age), Some(gender), Some(major))
                if violations.is_empty() =>
            {
                Ok(Self {
                    name,
                    student_number,
                    age,
                    gender,
                    major,
                    email,
                    phone,
                    enrollment_date: dto.enrollment_date,
                })
            }
            _ => Err(violations),
        }
    }
}

/// Direction applied to the sort column of a paginated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parses a client-supplied direction. `"desc"` in any casing selects
    /// descending, everything else ascending.
    pub fn from_param(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

/// Pagination and ordering parameters shared by the paged listing and search
/// operations.
#[derive(Debug, Clone)]
pub struct PageQuery {
    /// Zero-based page index.
    pub page: u64,
    pub per_page: u64,
    /// Wire name of the column to sort by.
    pub sort_by: String,
    pub sort_dir: SortDirection,
}

/// Optional filters for the search operation. Absent filters match every row.
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    pub name: Option<String>,
    pub major: Option<String>,
    pub gender: Option<String>,
}

/// A page of students along with pagination metadata.
#[derive(Debug, Clone)]
pub struct PaginatedStudents {
    pub students: Vec<Student>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedStudents {
    pub fn into_dto(self) -> PaginatedStudentsDto {
        PaginatedStudentsDto {
            students: self.students.into_iter().map(Student::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Aggregate counts over the whole student table.
#[derive(Debug, Clone)]
pub struct Statistics {
    pub total_count: u64,
    pub count_by_major: BTreeMap<String, u64>,
    pub count_by_gender: BTreeMap<String, u64>,
}

impl Statistics {
    pub fn into_dto(self) -> StatisticsDto {
        StatisticsDto {
            total_count: self.total_count,
            count_by_major: self.count_by_major,
            count_by_gender: self.count_by_gender,
        }
    }
}
