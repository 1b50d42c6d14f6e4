// Calendar Engine Library
// Scheduling and layout logic behind month, week and agenda calendar views

pub mod models;
pub mod services;
pub mod utils;

pub use models::event::{Event, EventDraft, EventPatch, ValidationError};
pub use models::settings::{AgendaMetrics, Settings};
pub use models::ui::ViewMode;
pub use services::agenda::{AgendaLayout, Viewport};
pub use services::event::{EventIndex, EventStore, IndexCache};
pub use services::grid::{month_grid, week_grid};
pub use services::layout::{position, EventPosition};
pub use utils::date::DayKey;
