/// Complete cinedex API Demo
///
/// Walks through the operations a movie site performs:
/// - Bulk loading movies, users and reviews from JSON lines
/// - Listing pages of the catalog
/// - Exact and fuzzy actor/director/genre lookups
/// - Posting and removing reviews
/// - Registration, login and watch history
/// - Statistics

use std::io::Cursor;
use std::sync::Arc;
use cinedex::core::config::Config;
use cinedex::loader::{read_json_lines, MovieRecord, ReviewRecord, UserRecord};
use cinedex::service::CredentialVerifier;
use cinedex::{Facet, Library, MovieId};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const MOVIES: &str = r#"
{"title": "Guardians of the Galaxy", "year": 2014, "director": "James Gunn", "actors": ["Chris Pratt", "Zoe Saldana", "Bradley Cooper"], "genres": ["Action", "Sci-Fi"], "runtime_minutes": 121}
{"title": "Passengers", "year": 2016, "director": "Morten Tyldum", "actors": ["Jennifer Lawrence", "Chris Pratt"], "genres": ["Drama", "Sci-Fi"], "runtime_minutes": 116}
{"title": "Moana", "year": 2016, "director": "Ron Clements", "actors": ["Auli'i Cravalho", "Dwayne Johnson"], "genres": ["Animation"], "runtime_minutes": 107}
{"title": "Arrival", "year": 2016, "director": "Denis Villeneuve", "actors": ["Amy Adams", "Jeremy Renner"], "genres": ["Drama", "Sci-Fi"], "runtime_minutes": 116}
"#;

const USERS: &str = r#"
{"username": "Thorke", "password_hash": "demo:Password123"}
"#;

const REVIEWS: &str = r#"
{"movie_id": "moana_2016", "username": "thorke", "rating": 8, "comment": "Great soundtrack", "timestamp": "2020-01-05T18:00:00Z"}
"#;

/// Demo-only verifier; real deployments plug in a proper password hasher
struct DemoVerifier;

impl CredentialVerifier for DemoVerifier {
    fn hash_password(&self, password: &str) -> String {
        format!("demo:{}", password)
    }

    fn verify_password(&self, password: &str, password_hash: &str) -> bool {
        password_hash == self.hash_password(password)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinedex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("\n╔═══════════════════════════════════════════════╗");
    println!("║        cinedex - Movie Library Demo           ║");
    println!("╚═══════════════════════════════════════════════╝\n");

    // Step 1: Load
    println!("Step 1: LOAD - Reading records...");
    let library = Library::new(Config::default(), Arc::new(DemoVerifier));
    let movies: Vec<MovieRecord> = read_json_lines(Cursor::new(MOVIES))?;
    let report = library.load_movies(movies);
    println!("  Movies: {} added, {} duplicates, {} rejected", report.added, report.duplicates, report.rejected);

    let users: Vec<UserRecord> = read_json_lines(Cursor::new(USERS))?;
    library.load_users(users);
    let reviews: Vec<ReviewRecord> = read_json_lines(Cursor::new(REVIEWS))?;
    library.load_reviews(reviews)?;
    println!();

    // Step 2: Listing
    println!("Step 2: LIST - First page of {}...", library.config().page_size);
    let page = library.listing(0);
    for movie in &page.movies {
        println!("  {} ({})", movie.title.as_deref().unwrap_or("?"), movie.year.unwrap_or_default());
    }
    println!("  showing {} of {}, more: {}\n", page.len(), page.total, page.has_next());

    // Step 3: Lookups
    println!("Step 3: SEARCH - Facet lookups...");
    let exact = library.movies_by(Facet::Actor, 0, 10, "Chris Pratt");
    println!("  actor 'Chris Pratt': {} movies", exact.total);

    for term in ["Chris Prat", "villeneuve", "scifi", "Nobody Atall"] {
        let facet = match term {
            "villeneuve" => Facet::Director,
            "scifi" => Facet::Genre,
            _ => Facet::Actor,
        };
        let page = library.search(facet, 0, 10, term);
        match &page.resolved {
            Some(name) => println!("  {} '{}' -> '{}': {} movies", facet.as_str(), term, name, page.total),
            None => println!("  {} '{}': {} movies", facet.as_str(), term, page.total),
        }
    }
    if let Some(actor) = library.actor("Chris Pratt") {
        println!("  Chris Pratt worked with: {}", actor.colleagues().collect::<Vec<_>>().join(", "));
    }
    println!();

    // Step 4: Reviews
    println!("Step 4: REVIEW - Posting and removing...");
    let moana = MovieId::from("moana_2016");
    let review_id = library
        .add_review(&moana, "thorke", "Even better the second time", 9)
        .ok_or("movie vanished")?;
    println!("  Moana has {} reviews", library.reviews(&moana).map_or(0, |r| r.len()));
    library.remove_review(&review_id, &moana);
    println!("  after removal: {}\n", library.reviews(&moana).map_or(0, |r| r.len()));

    // Step 5: Users
    println!("Step 5: USERS - Login and watch history...");
    let user = library.authenticate("Thorke", "Password123")?;
    println!("  logged in as {}", user.username);
    library.watch_movie("thorke", &moana);
    library.watch_movie("thorke", &MovieId::from("arrival_2016"));
    if let Some(user) = library.user("thorke") {
        println!("  watched {} movies, {} minutes\n", user.watched_movies.len(), user.minutes_watched);
    }

    // Step 6: Stats
    println!("Step 6: STATS");
    println!("{}", serde_json::to_string_pretty(&library.stats())?);

    Ok(())
}
