//! 냉동창고 냉동 부하 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 엔진을 쓰게 한다.

pub mod app;
pub mod breakdown;
pub mod config;
pub mod construction;
pub mod engine;
pub mod geometry;
pub mod i18n;
pub mod inputs;
pub mod loads;
pub mod project;
pub mod report;
pub mod repository;
pub mod tables;
pub mod telemetry;
pub mod ui_cli;
pub mod units;

pub use breakdown::{Diagnostic, LoadBreakdown};
pub use engine::{evaluate, evaluate_with, EngineSettings, EvaluationInputs};
