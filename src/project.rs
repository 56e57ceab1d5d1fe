//! 화면에서 입력한 그대로(문자열)의 프로젝트 입력과, 이를 엔진 입력으로 바꾸는 변환.
//!
//! 각 단계 입력은 사용자가 타이핑 중인 문자열이라 비어 있거나 숫자가 아닐 수 있다.
//! 변환은 절대 실패하지 않으며, 해석할 수 없는 숫자는 0, 알 수 없는 코드는 `None`이 된다.

use serde::{Deserialize, Serialize};

use crate::engine::EvaluationInputs;
use crate::inputs::{
    AmbientConditions, Construction, OperationalLoads, ProductProfile, RoomGeometry,
};
use crate::tables::{InsulationType, ProductType, StorageType};

/// 1단계: 방 치수.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRoom {
    pub length: String,
    pub width: String,
    pub height: String,
    pub door_width: String,
    pub door_height: String,
}

impl Default for RawRoom {
    fn default() -> Self {
        Self {
            length: "4.0".into(),
            width: "3.0".into(),
            height: "2.5".into(),
            door_width: "1.0".into(),
            door_height: "2.0".into(),
        }
    }
}

/// 2단계: 설계 외기/실내 조건.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawConditions {
    pub external_temp: String,
    pub internal_temp: String,
    pub operating_hours: String,
}

impl Default for RawConditions {
    fn default() -> Self {
        Self {
            external_temp: "35".into(),
            internal_temp: "-18".into(),
            operating_hours: "24".into(),
        }
    }
}

/// 3단계: 단열 사양.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawConstruction {
    pub insulation_type: String,
    /// 두께 [mm]
    pub insulation_thickness: String,
}

impl Default for RawConstruction {
    fn default() -> Self {
        Self {
            insulation_type: "PUF".into(),
            insulation_thickness: "150".into(),
        }
    }
}

/// 4단계: 제품 및 운영 부하.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawProduct {
    pub product_type: String,
    pub daily_load: String,
    pub incoming_temp: String,
    pub outgoing_temp: String,
    pub storage_type: String,
    pub number_of_people: String,
    pub working_hours: String,
    pub door_openings: String,
    pub lighting_wattage: String,
    pub equipment_load: String,
}

impl Default for RawProduct {
    fn default() -> Self {
        Self {
            product_type: "Beef".into(),
            daily_load: "1000".into(),
            incoming_temp: "25".into(),
            outgoing_temp: "-18".into(),
            storage_type: "Boxed".into(),
            number_of_people: "2".into(),
            working_hours: "4".into(),
            door_openings: "15".into(),
            lighting_wattage: "150".into(),
            equipment_load: "300".into(),
        }
    }
}

/// 네 단계 입력을 묶은 프로젝트. 저장소에 그대로 직렬화된다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawProject {
    pub room: RawRoom,
    pub conditions: RawConditions,
    pub construction: RawConstruction,
    pub product: RawProduct,
}

impl RawProject {
    /// 문자열 입력을 엔진 입력 레코드로 변환한다.
    pub fn to_inputs(&self) -> EvaluationInputs {
        let room = &self.room;
        let cond = &self.conditions;
        let cons = &self.construction;
        let prod = &self.product;
        EvaluationInputs {
            room: RoomGeometry {
                length_m: parse_number(&room.length),
                width_m: parse_number(&room.width),
                height_m: parse_number(&room.height),
                door_width_m: parse_number(&room.door_width),
                door_height_m: parse_number(&room.door_height),
            },
            construction: Construction {
                insulation: InsulationType::from_code(&cons.insulation_type),
                thickness_mm: parse_thickness_mm(&cons.insulation_thickness),
            },
            conditions: AmbientConditions {
                external_temp_c: parse_number(&cond.external_temp),
                internal_temp_c: parse_number(&cond.internal_temp),
                operating_hours: parse_number(&cond.operating_hours),
            },
            product: ProductProfile {
                product: ProductType::from_code(&prod.product_type),
                daily_load_kg: parse_number(&prod.daily_load),
                incoming_temp_c: parse_number(&prod.incoming_temp),
                outgoing_temp_c: parse_number(&prod.outgoing_temp),
                storage: StorageType::from_code(&prod.storage_type),
            },
            operations: OperationalLoads {
                number_of_people: parse_number(&prod.number_of_people),
                working_hours: parse_number(&prod.working_hours),
                door_openings_per_day: parse_number(&prod.door_openings),
                lighting_w: parse_number(&prod.lighting_wattage),
                equipment_w: parse_number(&prod.equipment_load),
            },
        }
    }
}

/// 문자열 앞부분의 숫자를 읽는다. 숫자로 시작하지 않거나 유한하지 않으면 0.
///
/// `"12.5 m"` → 12.5, `"1e3"` → 1000, `"-"` → 0, `""` → 0.
pub fn parse_number(raw: &str) -> f64 {
    let s = raw.trim();
    let end = numeric_prefix_len(s);
    if end == 0 {
        return 0.0;
    }
    match s[..end].parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// 두께 문자열을 mm 정수로 읽는다. 소수는 반올림하고 음수/비정상 값은 0.
pub fn parse_thickness_mm(raw: &str) -> u32 {
    let v = parse_number(raw);
    if v <= 0.0 {
        0
    } else {
        v.round().min(u32::MAX as f64) as u32
    }
}

fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        if digits > 0 {
            i = j;
        }
    }
    if digits == 0 {
        return 0;
    }
    // 지수부는 뒤에 숫자가 있을 때만 포함
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_reads_leading_prefix() {
        assert_eq!(parse_number("12abc"), 12.0);
        assert_eq!(parse_number("  -18 "), -18.0);
        assert_eq!(parse_number("1e3"), 1000.0);
        assert_eq!(parse_number("2.5e"), 2.5);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("4."), 4.0);
    }

    #[test]
    fn parse_number_defaults_to_zero() {
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("-"), 0.0);
        assert_eq!(parse_number("."), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number("1e999"), 0.0);
    }

    #[test]
    fn thickness_rounds_and_rejects_negative() {
        assert_eq!(parse_thickness_mm("150"), 150);
        assert_eq!(parse_thickness_mm("149.6"), 150);
        assert_eq!(parse_thickness_mm("-75"), 0);
        assert_eq!(parse_thickness_mm("thick"), 0);
    }

    #[test]
    fn default_project_matches_default_inputs() {
        assert_eq!(RawProject::default().to_inputs(), EvaluationInputs::default());
    }
}
