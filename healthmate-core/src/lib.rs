/*!
# Healthmate Core - Shared Content and Utilities

Library backing the Healthmate application server with:
- Bundled English/Burmese language packs with safe fallback lookup
- Static bilingual reference tables (immunity tips, food groups, incompatible pairs)
- Pure geographic and seasonal calculations (haversine distance, season buckets)
*/

pub mod food;
pub mod geo;
pub mod lang;
pub mod tips;

pub use geo::{distance_km, season_for_month, Season};
pub use lang::{Lang, Translator};
