use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::Registration;
use crate::submission::ValidatedRecord;

pub async fn create(pool: &SqlitePool, record: &ValidatedRecord) -> Result<Registration, sqlx::Error> {
    sqlx::query_as::<_, Registration>(
        "INSERT INTO registrations
            (id, name, email, phone, dob, street, city, state, postal, country,
             institution, student_id, message, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
    )
    .bind(Uuid::now_v7().to_string())
    .bind(&record.name)
    .bind(&record.email)
    .bind(&record.phone)
    .bind(&record.dob)
    .bind(&record.street)
    .bind(&record.city)
    .bind(&record.state)
    .bind(&record.postal)
    .bind(&record.country)
    .bind(&record.institution)
    .bind(&record.student_id)
    .bind(&record.message)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Registration>, sqlx::Error> {
    sqlx::query_as::<_, Registration>("SELECT * FROM registrations WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM registrations")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}
