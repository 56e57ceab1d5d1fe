//! 단열재 U값, 제품 열물성, 적재 방식 계수 등 정적 참조 데이터를 제공한다.
//! 값은 참고용이며 실제 설계 시 제조사/ASHRAE 자료로 검증해야 한다.

use serde::{Deserialize, Serialize};

/// 단열재 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsulationType {
    /// 경질 폴리우레탄 폼
    #[serde(rename = "PUF")]
    Puf,
    /// 발포 폴리스티렌
    #[serde(rename = "EPS")]
    Eps,
    Rockwool,
}

impl InsulationType {
    pub const ALL: [InsulationType; 3] = [
        InsulationType::Puf,
        InsulationType::Eps,
        InsulationType::Rockwool,
    ];

    pub fn code(self) -> &'static str {
        match self {
            InsulationType::Puf => "PUF",
            InsulationType::Eps => "EPS",
            InsulationType::Rockwool => "Rockwool",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InsulationType::Puf => "Polyurethane Foam (PUF)",
            InsulationType::Eps => "Expanded Polystyrene (EPS)",
            InsulationType::Rockwool => "Rockwool",
        }
    }

    /// 코드 문자열(대소문자 무시)로 단열재를 찾는다.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(code))
    }
}

/// 표에 수록된 단열 두께.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InsulationThickness {
    Mm75,
    Mm100,
    Mm125,
    Mm150,
    Mm200,
}

impl InsulationThickness {
    pub const ALL: [InsulationThickness; 5] = [
        InsulationThickness::Mm75,
        InsulationThickness::Mm100,
        InsulationThickness::Mm125,
        InsulationThickness::Mm150,
        InsulationThickness::Mm200,
    ];

    /// 권장 두께
    pub const RECOMMENDED: InsulationThickness = InsulationThickness::Mm150;

    pub fn mm(self) -> u32 {
        match self {
            InsulationThickness::Mm75 => 75,
            InsulationThickness::Mm100 => 100,
            InsulationThickness::Mm125 => 125,
            InsulationThickness::Mm150 => 150,
            InsulationThickness::Mm200 => 200,
        }
    }

    pub fn from_mm(mm: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.mm() == mm)
    }
}

/// 단열재/두께별 종합 열관류율 U [W/m²K].
///
/// 모든 조합이 표에 있으므로 실패하지 않는다. 표에 없는 두께는 [`u_factor_for`]에서 걸러진다.
pub fn u_factor(insulation: InsulationType, thickness: InsulationThickness) -> f64 {
    use InsulationThickness::*;
    use InsulationType::*;
    match (insulation, thickness) {
        (Puf, Mm75) => 0.290,
        (Puf, Mm100) => 0.220,
        (Puf, Mm125) => 0.176,
        (Puf, Mm150) => 0.147,
        (Puf, Mm200) => 0.110,
        (Eps, Mm75) => 0.467,
        (Eps, Mm100) => 0.350,
        (Eps, Mm125) => 0.280,
        (Eps, Mm150) => 0.233,
        (Eps, Mm200) => 0.175,
        (Rockwool, Mm75) => 0.533,
        (Rockwool, Mm100) => 0.400,
        (Rockwool, Mm125) => 0.320,
        (Rockwool, Mm150) => 0.267,
        (Rockwool, Mm200) => 0.200,
    }
}

/// 두께를 mm 정수로 받아 U값을 조회한다. 표에 없는 두께면 `None`.
pub fn u_factor_for(insulation: InsulationType, thickness_mm: u32) -> Option<f64> {
    InsulationThickness::from_mm(thickness_mm).map(|t| u_factor(insulation, t))
}

/// 저장 제품 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    Beef,
    Pork,
    Chicken,
    Fish,
    #[serde(rename = "Ice Cream")]
    IceCream,
    Vegetables,
    Fruits,
}

impl ProductType {
    pub const ALL: [ProductType; 7] = [
        ProductType::Beef,
        ProductType::Pork,
        ProductType::Chicken,
        ProductType::Fish,
        ProductType::IceCream,
        ProductType::Vegetables,
        ProductType::Fruits,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ProductType::Beef => "Beef",
            ProductType::Pork => "Pork",
            ProductType::Chicken => "Chicken",
            ProductType::Fish => "Fish",
            ProductType::IceCream => "Ice Cream",
            ProductType::Vegetables => "Vegetables",
            ProductType::Fruits => "Fruits",
        }
    }

    /// 코드 문자열로 제품을 찾는다. 대소문자와 공백은 무시한다 (`icecream` == `Ice Cream`).
    pub fn from_code(code: &str) -> Option<Self> {
        let wanted = squash(code);
        Self::ALL.into_iter().find(|p| squash(p.code()) == wanted)
    }

    pub fn properties(self) -> ProductProperties {
        match self {
            ProductType::Beef => pp(3.14, 1.70, 233.0, -1.7, 1050.0, 0.45),
            ProductType::Pork => pp(2.85, 1.60, 208.0, -2.2, 1010.0, 0.45),
            ProductType::Chicken => pp(3.31, 1.55, 246.0, -2.8, 1000.0, 0.40),
            ProductType::Fish => pp(3.60, 1.90, 270.0, -2.2, 1020.0, 0.45),
            ProductType::IceCream => pp(2.95, 1.63, 180.0, -5.6, 550.0, 0.55),
            ProductType::Vegetables => pp(3.90, 1.97, 300.0, -1.0, 600.0, 0.55),
            ProductType::Fruits => pp(3.77, 1.93, 280.0, -1.5, 650.0, 0.55),
        }
    }
}

/// 제품 열물성.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductProperties {
    /// 동결점 이상 비열 [kJ/kg·K]
    pub specific_heat_above_kj_per_kgk: f64,
    /// 동결점 이하 비열 [kJ/kg·K]
    pub specific_heat_below_kj_per_kgk: f64,
    /// 동결 잠열 [kJ/kg]
    pub latent_heat_kj_per_kg: f64,
    /// 동결점 [°C]
    pub freezing_point_c: f64,
    /// 밀도 [kg/m³]
    pub density_kg_per_m3: f64,
    /// 적재 효율(0~1)
    pub storage_efficiency: f64,
}

impl ProductProperties {
    /// 알 수 없는 제품에 쓰는 대체값. 모든 열물성이 0이다.
    pub const ZEROED: ProductProperties = pp(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
}

/// 적재 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageType {
    Boxed,
    Palletized,
    Bulk,
    Hanging,
    Shelved,
}

/// 적재 방식을 모를 때 쓰는 중립 계수.
pub const NEUTRAL_STORAGE_FACTOR: f64 = 1.0;

impl StorageType {
    pub const ALL: [StorageType; 5] = [
        StorageType::Boxed,
        StorageType::Palletized,
        StorageType::Bulk,
        StorageType::Hanging,
        StorageType::Shelved,
    ];

    pub fn code(self) -> &'static str {
        match self {
            StorageType::Boxed => "Boxed",
            StorageType::Palletized => "Palletized",
            StorageType::Bulk => "Bulk",
            StorageType::Hanging => "Hanging",
            StorageType::Shelved => "Shelved",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let wanted = squash(code);
        Self::ALL.into_iter().find(|s| squash(s.code()) == wanted)
    }

    /// 적재 밀도 보정 계수(0~1).
    pub fn factor(self) -> f64 {
        match self {
            StorageType::Boxed => 0.85,
            StorageType::Palletized => 0.75,
            StorageType::Bulk => 0.95,
            StorageType::Hanging => 0.60,
            StorageType::Shelved => 0.70,
        }
    }
}

const fn pp(
    above: f64,
    below: f64,
    latent: f64,
    freezing: f64,
    density: f64,
    efficiency: f64,
) -> ProductProperties {
    ProductProperties {
        specific_heat_above_kj_per_kgk: above,
        specific_heat_below_kj_per_kgk: below,
        latent_heat_kj_per_kg: latent,
        freezing_point_c: freezing,
        density_kg_per_m3: density,
        storage_efficiency: efficiency,
    }
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

// NOTE:
// - U-factors are panel values (insulation core plus typical steel skins and surface films),
//   approximated from k = 0.022 (PUF), 0.035 (EPS), 0.040 (Rockwool) W/mK.
// - Product properties follow ASHRAE Refrigeration handbook tables (rounded). Density is the
//   bulk product density; storage efficiency is the usable share of room volume.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_resolve_case_and_space_insensitive() {
        assert_eq!(InsulationType::from_code("puf"), Some(InsulationType::Puf));
        assert_eq!(ProductType::from_code("icecream"), Some(ProductType::IceCream));
        assert_eq!(StorageType::from_code(" boxed "), Some(StorageType::Boxed));
        assert_eq!(ProductType::from_code("Tofu"), None);
    }

    #[test]
    fn thicker_insulation_has_lower_u() {
        for ins in InsulationType::ALL {
            let values: Vec<f64> = InsulationThickness::ALL
                .iter()
                .map(|t| u_factor(ins, *t))
                .collect();
            assert!(values.windows(2).all(|w| w[0] > w[1]), "{ins:?}: {values:?}");
        }
    }
}
