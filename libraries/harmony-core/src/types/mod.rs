mod ids;
mod playlist;
mod provider;
mod search;
mod track;
mod user;

pub use ids::{PlaylistId, ServiceId, TrackId, UserId};
pub use playlist::{Playlist, DEFAULT_PLAYLIST_NAME, LOCAL_OWNER};
pub use provider::{PlaylistOrigin, Provider};
pub use search::{Album, Artist, PlaylistSummary, ResultKind, SearchFilters, SearchResults};
pub use track::Track;
pub use user::{Service, User};
