//! Postgres-backed application store.
//!
//! Rows are mapped by hand (runtime queries, no compile-time macros) the
//! same way the rest of the service treats the database: enum columns hold
//! canonical tags as TEXT, set-valued fields are TEXT[] and `created_at`
//! is assigned by the database at insert time.

use crate::domain::application::{
    DemoClass, Gender, NewTutorApplication, PreferredStudents, Qualification, TeachingMode,
    TimeSlot, TutorApplication, Weekday,
};
use crate::storage::{ApplicationStore, StorageError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;

/// Builds the bounded connection pool. Idle connections are evicted after
/// 30s and acquisition gives up after 2s, surfacing pool exhaustion as a
/// `StorageError` instead of hanging the request.
pub async fn connect_pool(database_url: &str, max_connections: u32) -> Result<PgPool, StorageError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .idle_timeout(Some(Duration::from_secs(30)))
        .acquire_timeout(Duration::from_secs(2))
        .connect(database_url)
        .await?;
    Ok(pool)
}

pub struct PgApplicationStore {
    pool: PgPool,
}

impl PgApplicationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Creates the applications table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StorageError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS tutor_applications (
                id SERIAL PRIMARY KEY,
                full_name TEXT NOT NULL,
                gender TEXT NOT NULL,
                city TEXT NOT NULL,
                area TEXT NOT NULL,
                subjects TEXT[] NOT NULL,
                teaching_mode TEXT NOT NULL,
                travel_distance TEXT,
                preferred_students TEXT,
                islamic_qualification TEXT NOT NULL,
                other_qualification TEXT,
                institute_name TEXT,
                experience_years INTEGER NOT NULL,
                demo_class_available TEXT NOT NULL,
                days_available TEXT[] NOT NULL,
                preferred_time_slots TEXT[] NOT NULL,
                rate_per_hour TEXT,
                rate_per_month TEXT,
                short_bio TEXT NOT NULL,
                confirm_accuracy BOOLEAN NOT NULL,
                phone_number VARCHAR(20) NOT NULL,
                email TEXT,
                cnic_file TEXT,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

const SELECT_COLUMNS: &str = "id, full_name, gender, city, area, subjects, teaching_mode, \
     travel_distance, preferred_students, islamic_qualification, other_qualification, \
     institute_name, experience_years, demo_class_available, days_available, \
     preferred_time_slots, rate_per_hour, rate_per_month, short_bio, confirm_accuracy, \
     phone_number, email, cnic_file, created_at";

#[async_trait]
impl ApplicationStore for PgApplicationStore {
    async fn insert(
        &self,
        application: &NewTutorApplication,
    ) -> Result<TutorApplication, StorageError> {
        let subjects: Vec<String> = application.subjects.clone();
        let days: Vec<String> = application
            .days_available
            .iter()
            .map(|d| d.as_str().to_string())
            .collect();
        let slots: Vec<String> = application
            .preferred_time_slots
            .iter()
            .map(|s| s.as_str().to_string())
            .collect();

        let row = sqlx::query(
            "INSERT INTO tutor_applications (
                full_name, gender, city, area, subjects, teaching_mode,
                travel_distance, preferred_students, islamic_qualification,
                other_qualification, institute_name, experience_years,
                demo_class_available, days_available, preferred_time_slots,
                rate_per_hour, rate_per_month, short_bio, confirm_accuracy,
                phone_number, email, cnic_file
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                $13, $14, $15, $16, $17, $18, $19, $20, $21, $22
            ) RETURNING id, created_at",
        )
        .bind(&application.full_name)
        .bind(application.gender.as_str())
        .bind(&application.city)
        .bind(&application.area)
        .bind(&subjects)
        .bind(application.teaching_mode.as_str())
        .bind(application.travel_distance.as_deref())
        .bind(application.preferred_students.map(|p| p.as_str()))
        .bind(application.islamic_qualification.as_str())
        .bind(application.other_qualification.as_deref())
        .bind(application.institute_name.as_deref())
        .bind(application.experience_years)
        .bind(application.demo_class_available.as_str())
        .bind(&days)
        .bind(&slots)
        .bind(application.rate_per_hour.as_deref())
        .bind(application.rate_per_month.as_deref())
        .bind(&application.short_bio)
        .bind(application.confirm_accuracy)
        .bind(&application.phone_number)
        .bind(application.email.as_deref())
        .bind(application.cnic_file.as_deref())
        .fetch_one(&self.pool)
        .await?;

        let id: i32 = row.try_get("id")?;
        let created_at: DateTime<Utc> = row.try_get("created_at")?;
        Ok(TutorApplication {
            id,
            record: application.clone(),
            created_at,
        })
    }

    async fn list_all(&self) -> Result<Vec<TutorApplication>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM tutor_applications ORDER BY created_at DESC, id DESC",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_application).collect()
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<TutorApplication>, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM tutor_applications WHERE id = $1",
            SELECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_application).transpose()
    }

    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

fn parse_stored<T>(
    column: &'static str,
    raw: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, StorageError> {
    parse(raw).ok_or_else(|| StorageError::InvalidRow {
        column,
        value: raw.to_string(),
    })
}

fn row_to_application(row: &PgRow) -> Result<TutorApplication, StorageError> {
    let gender: String = row.try_get("gender")?;
    let teaching_mode: String = row.try_get("teaching_mode")?;
    let preferred_students: Option<String> = row.try_get("preferred_students")?;
    let islamic_qualification: String = row.try_get("islamic_qualification")?;
    let demo_class_available: String = row.try_get("demo_class_available")?;
    let days_available: Vec<String> = row.try_get("days_available")?;
    let preferred_time_slots: Vec<String> = row.try_get("preferred_time_slots")?;

    let record = NewTutorApplication {
        full_name: row.try_get("full_name")?,
        gender: parse_stored("gender", &gender, Gender::parse)?,
        city: row.try_get("city")?,
        area: row.try_get("area")?,
        subjects: row.try_get("subjects")?,
        teaching_mode: parse_stored("teaching_mode", &teaching_mode, TeachingMode::parse)?,
        travel_distance: row.try_get("travel_distance")?,
        preferred_students: preferred_students
            .as_deref()
            .map(|p| parse_stored("preferred_students", p, PreferredStudents::parse))
            .transpose()?,
        islamic_qualification: parse_stored(
            "islamic_qualification",
            &islamic_qualification,
            Qualification::parse,
        )?,
        other_qualification: row.try_get("other_qualification")?,
        institute_name: row.try_get("institute_name")?,
        experience_years: row.try_get("experience_years")?,
        demo_class_available: parse_stored(
            "demo_class_available",
            &demo_class_available,
            DemoClass::parse,
        )?,
        days_available: days_available
            .iter()
            .map(|d| parse_stored("days_available", d, Weekday::parse))
            .collect::<Result<_, _>>()?,
        preferred_time_slots: preferred_time_slots
            .iter()
            .map(|s| parse_stored("preferred_time_slots", s, TimeSlot::parse))
            .collect::<Result<_, _>>()?,
        rate_per_hour: row.try_get("rate_per_hour")?,
        rate_per_month: row.try_get("rate_per_month")?,
        short_bio: row.try_get("short_bio")?,
        confirm_accuracy: row.try_get("confirm_accuracy")?,
        phone_number: row.try_get("phone_number")?,
        email: row.try_get("email")?,
        cnic_file: row.try_get("cnic_file")?,
    };

    Ok(TutorApplication {
        id: row.try_get("id")?,
        record,
        created_at: row.try_get("created_at")?,
    })
}
