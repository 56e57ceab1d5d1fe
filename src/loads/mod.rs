//! 냉동 부하 항목별 계산 모듈을 모아둔다.
//! 전열(벽/천장/바닥), 제품, 침입 공기(환기/문 개방), 내부 발열, 그리고 합산으로 구성한다.

pub mod aggregate;
pub mod infiltration;
pub mod internal;
pub mod product;
pub mod transmission;

pub use aggregate::{LoadTotals, StorageCapacity, SAFETY_FRACTION};
pub use infiltration::{InfiltrationLoad, InfiltrationSettings};
pub use internal::{InternalLoad, PEOPLE_HEAT_KW};
pub use product::{ProductHeat, ProductLoad};
pub use transmission::TransmissionLoad;
