pub mod achievements;
pub mod activity;
pub mod calories;
pub mod goals;
pub mod header;
pub mod leaderboard;
pub mod login;
pub mod statusbar;
pub mod steps;
pub mod trends;
pub mod wellness;
