//! Presenters derive display attributes from aggregated assessment state.
mod badge_presenter;

pub use badge_presenter::{BadgePresenter, BadgeState, BadgeView};
