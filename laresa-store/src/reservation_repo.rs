use std::time::Duration;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;
use laresa_core::models::{City, Customer, Reservation};
use laresa_core::repository::{BoxError, ReservationStore};

pub struct PostgresReservationStore {
    pub pool: PgPool,
}

impl PostgresReservationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool and bring the `reservations` table up to date
    pub async fn connect(connection_string: &str) -> Result<Self, BoxError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(connection_string)
            .await?;

        info!("Running reservation migrations...");
        sqlx::migrate!("../migrations").run(&pool).await?;
        info!("Reservation store ready");

        Ok(Self::new(pool))
    }
}

#[derive(sqlx::FromRow)]
struct ReservationRow {
    id: String,
    customer_email: String,
    departure_date: i64,
    departure_city: String,
    destination_city: String,
    distance: f64,
    price: f64,
}

impl From<ReservationRow> for Reservation {
    fn from(row: ReservationRow) -> Self {
        Self {
            id: row.id,
            customer: Customer::new(row.customer_email),
            departure_date: row.departure_date,
            departure_city: City::new(row.departure_city),
            destination_city: City::new(row.destination_city),
            distance: row.distance,
            price: row.price,
        }
    }
}

#[async_trait]
impl ReservationStore for PostgresReservationStore {
    async fn save_reservation(
        &self,
        reservation: &Reservation,
    ) -> Result<(), BoxError> {
        sqlx::query(
            r#"
            INSERT INTO reservations (id, customer_email, departure_date, departure_city, destination_city, distance, price)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&reservation.id)
        .bind(&reservation.customer.email)
        .bind(reservation.departure_date)
        .bind(&reservation.departure_city.name)
        .bind(&reservation.destination_city.name)
        .bind(reservation.distance)
        .bind(reservation.price)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_reservation(
        &self,
        id: &str,
    ) -> Result<Option<Reservation>, BoxError> {
        let row = sqlx::query_as::<_, ReservationRow>(
            r#"
            SELECT id, customer_email, departure_date, departure_city, destination_city, distance, price
            FROM reservations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Reservation::from))
    }
}
