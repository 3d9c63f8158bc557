pub mod core;
pub mod model;
pub mod index;
pub mod search;
pub mod repository;
pub mod service;
pub mod loader;

pub use crate::core::config::{Config, FuzzyConfig, IdentityMode, ResultOrder};
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::library::Library;
pub use crate::core::types::{Facet, MovieId, ReviewId};

/*
┌──────────────────────────────────────────────────────────────────────────────┐
│                          CINEDEX STRUCT ARCHITECTURE                         │
└──────────────────────────────────────────────────────────────────────────────┘

┌─────────────────────────────── CONTEXT LAYER ────────────────────────────────┐
│  struct Library  (cloned into every request handler)                          │
│  ┌────────────────────────────────────────────────────────────────────────┐  │
│  │ config:   Arc<Config>                      // page size, fuzzy policy   │  │
│  │ repo:     Arc<RwLock<MemoryRepository>>    // one writer, many readers  │  │
│  │ queries:  Arc<QueryService>                // matcher + resolution LRU  │  │
│  │ verifier: Arc<dyn CredentialVerifier>      // supplied by the app       │  │
│  └────────────────────────────────────────────────────────────────────────┘  │
└───────────────────────────────────────────────────────────────────────────────┘
                 │ read()                               │ write()
                 ▼                                      ▼
┌─────────────────────────────── SERVICE LAYER ────────────────────────────────┐
│  QueryService            review::{add,remove}_review     auth::register_user  │
│   get_n_movies            attach_review (loader)          authenticate_user   │
│   get_n_movies_by[_fuzzy] reviews_for_movie               watch_movie         │
│   fetch_movie_info_by_id                                                      │
│        │ exact miss? caller may retry fuzzy                                   │
│        ▼                                                                      │
│  FuzzyMatcher ── levenshtein DFA per term, threshold scaled by term length    │
│  ResolutionCache ── LRU (facet, term) -> name, dropped on generation change   │
└───────────────────────────────────────────────────────────────────────────────┘
                 │                 trait Repository
                 ▼
┌─────────────────────────────── STORAGE LAYER ────────────────────────────────┐
│  MemoryRepository                                                             │
│  ┌────────────────────────────────────────────────────────────────────────┐  │
│  │ catalog: CatalogIndex                                                   │  │
│  │   movies:    HashMap<MovieId, Movie>      // sole owner                 │  │
│  │   order:     Vec<(SortKey, MovieId)>      // (lower(title), year) asc   │  │
│  │   actors / directors / genres: SecondaryIndex  name -> [MovieId]        │  │
│  │   generation: u64                                                       │  │
│  │ users:   HashMap<String, User>            // normalised username        │  │
│  └────────────────────────────────────────────────────────────────────────┘  │
│  Movie ── owns ReviewLedger (Vec<Review>, insertion order)                    │
└───────────────────────────────────────────────────────────────────────────────┘
*/
