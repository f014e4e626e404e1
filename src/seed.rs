//! Demo catalog seeding: five movies, a few future showtimes each, and a
//! fixed A-F x 1-10 seat grid per showtime. Runs only against an empty
//! catalog so restarts keep already-booked state.

use chrono::{DateTime, Duration, Timelike, Utc};
use rand::Rng;
use sqlx::PgPool;
use tracing::info;

struct MovieSeed {
    title: &'static str,
    description: &'static str,
    duration_min: i32,
    poster_url: &'static str,
}

const MOVIES: [MovieSeed; 5] = [
    MovieSeed {
        title: "Sunny Sanskari Ki Tulsi Kumari",
        description: "Comedy / Romantic - a light-hearted family entertainer.",
        duration_min: 130,
        poster_url: "/posters/s.avif",
    },
    MovieSeed {
        title: "Avatar: The Way of Water",
        description: "Action/Adventure/Fantasy/Sci-Fi - the epic sea-bound chapter of the Avatar saga.",
        duration_min: 192,
        poster_url: "/posters/a.avif",
    },
    MovieSeed {
        title: "Kantara: A Legend Chapter-1",
        description: "Adventure/Drama/Thriller - a mythic tale rooted in folklore.",
        duration_min: 148,
        poster_url: "/posters/k.avif",
    },
    MovieSeed {
        title: "Idli Kadai",
        description: "Action/Drama/Family - an emotional, grounded drama.",
        duration_min: 115,
        poster_url: "/posters/i.avif",
    },
    MovieSeed {
        title: "They Call Him OG",
        description: "Action/Crime/Drama/Thriller - a gritty crime-thriller.",
        duration_min: 120,
        poster_url: "/posters/t.avif",
    },
];

const SEAT_ROWS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];
const SEATS_PER_ROW: i32 = 10;
const SHOWTIME_OFFSET_HOURS: [f64; 5] = [2.0, 3.5, 5.0, 6.5, 8.0];

pub async fn seed_if_empty(pool: &PgPool) -> Result<(), sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        info!("Catalog already seeded ({} movies), skipping", count);
        return Ok(());
    }

    info!("Seeding demo catalog...");

    for movie in &MOVIES {
        // ThreadRng is not Send, so it must not live across the inserts.
        let (rating, votes, showtime_count) = {
            let mut rng = rand::thread_rng();
            (
                ((6.0 + rng.gen::<f64>() * 4.0) * 10.0).round() / 10.0,
                500 + (rng.gen::<f64>() * 200_000.0) as i64,
                1 + (rng.gen::<f64>() * 3.0) as usize,
            )
        };

        let movie_id: i64 = sqlx::query_scalar(
            "INSERT INTO movies (title, description, duration_min, poster_url, rating, votes)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(movie.title)
        .bind(movie.description)
        .bind(movie.duration_min)
        .bind(movie.poster_url)
        .bind(rating)
        .bind(votes)
        .fetch_one(pool)
        .await?;

        // 1-3 showtimes per movie, aligned to the half hour.
        for offset_hours in SHOWTIME_OFFSET_HOURS.iter().take(showtime_count) {
            let starts_at = align_to_half_hour(
                Utc::now() + Duration::minutes((offset_hours * 60.0) as i64),
            );

            let showtime_id: i64 = sqlx::query_scalar(
                "INSERT INTO showtimes (movie_id, starts_at) VALUES ($1, $2) RETURNING id",
            )
            .bind(movie_id)
            .bind(starts_at)
            .fetch_one(pool)
            .await?;

            create_seat_grid(pool, showtime_id).await?;
        }
    }

    info!("Seed done");
    Ok(())
}

/// Bulk-create the fixed seat grid for a freshly inserted showtime.
pub async fn create_seat_grid(pool: &PgPool, showtime_id: i64) -> Result<(), sqlx::Error> {
    let mut rows: Vec<String> = Vec::with_capacity(SEAT_ROWS.len() * SEATS_PER_ROW as usize);
    let mut numbers: Vec<i32> = Vec::with_capacity(rows.capacity());
    for row in SEAT_ROWS {
        for number in 1..=SEATS_PER_ROW {
            rows.push(row.to_string());
            numbers.push(number);
        }
    }

    sqlx::query(
        "INSERT INTO seats (showtime_id, seat_row, seat_number)
         SELECT $1, r, n FROM UNNEST($2::text[], $3::int[]) AS t(r, n)",
    )
    .bind(showtime_id)
    .bind(&rows)
    .bind(&numbers)
    .execute(pool)
    .await?;
    Ok(())
}

fn align_to_half_hour(dt: DateTime<Utc>) -> DateTime<Utc> {
    let dt = dt.with_second(0).unwrap().with_nanosecond(0).unwrap();
    match dt.minute() {
        m if m < 15 => dt.with_minute(0).unwrap(),
        m if m < 45 => dt.with_minute(30).unwrap(),
        _ => dt.with_minute(0).unwrap() + Duration::hours(1),
    }
}
