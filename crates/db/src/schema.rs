use eyre::Result;
use sqlx::{Executor, Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create rooms table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS rooms (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL UNIQUE,
            capacity INTEGER NOT NULL CHECK (capacity > 0),
            kind VARCHAR(32) NOT NULL CHECK (kind IN ('Lecture', 'Lab', 'Auditorium')),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create instructors table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS instructors (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create courses table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS courses (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create semesters table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS semesters (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            description VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create disciplines table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS disciplines (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            course_id UUID NOT NULL REFERENCES courses(id),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create cohorts table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cohorts (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            identifier VARCHAR(255) NOT NULL,
            course_id UUID NOT NULL REFERENCES courses(id),
            semester_id UUID NOT NULL REFERENCES semesters(id),
            enrolled_count INTEGER NOT NULL CHECK (enrolled_count > 0),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create allocations table. (room_id, day, shift) is deliberately not unique.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS allocations (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            day VARCHAR(16) NOT NULL
                CHECK (day IN ('Monday', 'Tuesday', 'Wednesday', 'Thursday', 'Friday', 'Saturday')),
            shift VARCHAR(16) NOT NULL CHECK (shift IN ('Morning', 'Afternoon', 'Night')),
            modality VARCHAR(16) NOT NULL
                CHECK (modality IN ('In-person', 'Hybrid', 'Blended', 'Remote')),
            room_id UUID NOT NULL REFERENCES rooms(id),
            instructor_id UUID NOT NULL REFERENCES instructors(id),
            discipline_id UUID NOT NULL REFERENCES disciplines(id),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create allocation_cohort_links table; links go away with their allocation
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS allocation_cohort_links (
            allocation_id UUID NOT NULL REFERENCES allocations(id) ON DELETE CASCADE,
            cohort_id UUID NOT NULL REFERENCES cohorts(id),
            PRIMARY KEY (allocation_id, cohort_id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create credentials table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS credentials (
            username VARCHAR(255) PRIMARY KEY,
            secret_hash VARCHAR(255) NOT NULL,
            display_name VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes; several statements, so sent as a simple query
    pool.execute(
        r#"
        CREATE INDEX IF NOT EXISTS idx_allocations_day_shift ON allocations(day, shift);
        CREATE INDEX IF NOT EXISTS idx_allocations_instructor_id ON allocations(instructor_id);
        CREATE INDEX IF NOT EXISTS idx_allocations_room_id ON allocations(room_id);
        CREATE INDEX IF NOT EXISTS idx_allocation_cohort_links_cohort_id ON allocation_cohort_links(cohort_id);
        CREATE INDEX IF NOT EXISTS idx_disciplines_course_id ON disciplines(course_id);
        CREATE INDEX IF NOT EXISTS idx_cohorts_course_id ON cohorts(course_id);
        "#,
    )
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
