//! 계산 결과를 사람이 읽는 텍스트 또는 TOML로 출력한다.
//!
//! 계산값은 항상 SI이며, 여기서 설정된 표시 단위로만 바꾼다.

use thiserror::Error;

use crate::breakdown::LoadBreakdown;
use crate::config::DefaultUnits;
use crate::i18n::{keys, Translator};
use crate::tables::{self, InsulationThickness, InsulationType, ProductType, StorageType};
use crate::units::*;

/// 결과 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Toml,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("결과 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 표시 단위 변환기.
#[derive(Debug, Clone, Copy)]
pub struct DisplayUnits {
    units: DefaultUnits,
}

impl DisplayUnits {
    pub fn new(units: DefaultUnits) -> Self {
        Self { units }
    }

    pub fn power(&self, kw: f64) -> String {
        let v = convert_power(kw, PowerUnit::Kilowatt, self.units.power);
        format!("{v:.2} {}", self.units.power.symbol())
    }

    pub fn temperature(&self, c: f64) -> String {
        let v = convert_temperature(c, TemperatureUnit::Celsius, self.units.temperature);
        format!("{v:.1} {}", self.units.temperature.symbol())
    }

    pub fn temperature_diff(&self, k: f64) -> String {
        let v = convert_temperature_diff(k, TemperatureUnit::Celsius, self.units.temperature);
        format!("{v:.1} {}", self.units.temperature.symbol())
    }

    pub fn length(&self, m: f64) -> String {
        let v = convert_length(m, LengthUnit::Meter, self.units.length);
        format!("{v:.2} {}", self.units.length.symbol())
    }

    pub fn area(&self, m2: f64) -> String {
        let v = convert_area(m2, AreaUnit::SquareMeter, self.units.area);
        format!("{v:.2} {}", self.units.area.symbol())
    }

    pub fn volume(&self, m3: f64) -> String {
        let v = convert_volume(m3, VolumeUnit::CubicMeter, self.units.volume);
        format!("{v:.2} {}", self.units.volume.symbol())
    }

    pub fn mass(&self, kg: f64) -> String {
        let v = convert_mass(kg, MassUnit::Kilogram, self.units.mass);
        format!("{v:.0} {}", self.units.mass.symbol())
    }

    pub fn energy_kwh(&self, kwh: f64) -> String {
        let v = convert_energy(kwh, EnergyUnit::KilowattHour, self.units.energy);
        format!("{v:.1} {}", self.units.energy.symbol())
    }

    pub fn u_factor(&self, u: f64) -> String {
        let v = convert_heat_transfer(
            u,
            HeatTransferUnit::WPerSquareMeterK,
            self.units.heat_transfer,
        );
        format!("{v:.3} {}", self.units.heat_transfer.symbol())
    }

    pub fn r_value(&self, r: f64) -> String {
        let v = convert_thermal_resistance(
            r,
            HeatTransferUnit::WPerSquareMeterK,
            self.units.heat_transfer,
        );
        format!("{v:.2} {}", self.units.heat_transfer.resistance_symbol())
    }
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!("\n[{title}]\n"));
}

fn row(out: &mut String, label: &str, value: impl AsRef<str>) {
    out.push_str(&format!("  {label:<34} {}\n", value.as_ref()));
}

/// 결과 화면과 같은 순서로 텍스트 보고서를 만든다.
pub fn render_text(b: &LoadBreakdown, units: &DefaultUnits, tr: &Translator) -> String {
    let d = DisplayUnits::new(*units);
    let unknown = tr.t(keys::VALUE_UNKNOWN);
    let mut out = String::new();

    out.push_str(&format!(
        "=== {}: {} ===\n",
        tr.t(keys::REPORT_TITLE),
        d.power(b.total_load_with_safety_kw)
    ));
    row(&mut out, tr.t(keys::REPORT_DAILY_ENERGY), d.energy_kwh(b.daily_energy_kwh));

    section(&mut out, tr.t(keys::SECTION_STORAGE));
    row(&mut out, tr.t(keys::STORAGE_MAXIMUM), d.mass(b.storage.maximum_kg));
    row(&mut out, tr.t(keys::STORAGE_DAILY_LOAD), d.mass(b.product_info.daily_load_kg));
    row(
        &mut out,
        tr.t(keys::STORAGE_UTILIZATION),
        format!("{:.1} %", b.storage.utilization_pct),
    );

    section(&mut out, tr.t(keys::SECTION_TRANSMISSION));
    row(&mut out, tr.t(keys::TRANSMISSION_WALLS), d.power(b.transmission.walls_kw));
    row(&mut out, tr.t(keys::TRANSMISSION_CEILING), d.power(b.transmission.ceiling_kw));
    row(&mut out, tr.t(keys::TRANSMISSION_FLOOR), d.power(b.transmission.floor_kw));
    row(&mut out, tr.t(keys::SUBTOTAL_TRANSMISSION), d.power(b.transmission.total_kw));

    section(&mut out, tr.t(keys::SECTION_PRODUCT));
    row(&mut out, tr.t(keys::PRODUCT_MASS), d.mass(b.product_info.daily_load_kg));
    row(&mut out, tr.t(keys::PRODUCT_SENSIBLE_ABOVE), d.power(b.product.sensible_above_kw));
    row(&mut out, tr.t(keys::PRODUCT_LATENT), d.power(b.product.latent_kw));
    row(&mut out, tr.t(keys::PRODUCT_SENSIBLE_BELOW), d.power(b.product.sensible_below_kw));
    row(&mut out, tr.t(keys::SUBTOTAL_PRODUCT), d.power(b.product.total_kw));

    section(&mut out, tr.t(keys::SECTION_AIR_CHANGE));
    row(&mut out, tr.t(keys::CALC_VOLUME), d.volume(b.volume_m3()));
    row(
        &mut out,
        tr.t(keys::AIR_CHANGE_RATE),
        format!("{:.2} /h", b.air_change_rate_per_h),
    );
    row(&mut out, tr.t(keys::AIR_LOAD), d.power(b.air_infiltration_kw));

    section(&mut out, tr.t(keys::SECTION_DOOR));
    row(&mut out, tr.t(keys::CALC_DOOR_AREA), d.area(b.areas.door_m2));
    row(&mut out, tr.t(keys::DOOR_OPENINGS), format!("{:.0}", b.door_openings_per_day));
    row(&mut out, tr.t(keys::DOOR_LOAD), d.power(b.door_load_kw));

    section(&mut out, tr.t(keys::SECTION_INTERNAL));
    row(&mut out, tr.t(keys::INTERNAL_PEOPLE), d.power(b.internal.people_kw));
    row(&mut out, tr.t(keys::INTERNAL_LIGHTING), d.power(b.internal.lighting_kw));
    row(&mut out, tr.t(keys::INTERNAL_EQUIPMENT), d.power(b.internal.equipment_kw));
    row(&mut out, tr.t(keys::SUBTOTAL_INTERNAL), d.power(b.internal.total_kw));

    section(&mut out, tr.t(keys::SECTION_FINAL));
    row(&mut out, tr.t(keys::FINAL_TOTAL), d.power(b.total_load_kw));
    row(&mut out, tr.t(keys::FINAL_SAFETY), d.power(b.safety_margin_kw));
    row(&mut out, tr.t(keys::FINAL_REQUIRED), d.power(b.total_load_with_safety_kw));

    section(&mut out, tr.t(keys::SECTION_ROOM_SUMMARY));
    row(
        &mut out,
        tr.t(keys::SUMMARY_DIMENSIONS),
        format!(
            "{} × {} × {}",
            d.length(b.room.length_m),
            d.length(b.room.width_m),
            d.length(b.room.height_m)
        ),
    );
    row(
        &mut out,
        tr.t(keys::SUMMARY_DOOR),
        format!("{} × {}", d.length(b.room.door_width_m), d.length(b.room.door_height_m)),
    );
    row(&mut out, tr.t(keys::CALC_VOLUME), d.volume(b.volume_m3()));
    row(&mut out, tr.t(keys::CALC_DELTA_T), d.temperature_diff(b.temperature_difference_k));

    section(&mut out, tr.t(keys::SECTION_CONSTRUCTION_SUMMARY));
    let insulation = b.construction.insulation.map(InsulationType::label).unwrap_or(unknown);
    row(&mut out, tr.t(keys::SUMMARY_INSULATION), insulation);
    row(
        &mut out,
        tr.t(keys::SUMMARY_THICKNESS),
        format!("{} mm", b.construction.thickness_mm),
    );
    row(&mut out, tr.t(keys::CALC_U_FACTOR), d.u_factor(b.construction.u_factor_w_m2k));
    let r = match b.construction.r_value_m2k_w {
        Some(r) => d.r_value(r),
        None => tr.t(keys::VALUE_UNDEFINED).to_string(),
    };
    row(&mut out, tr.t(keys::CALC_R_VALUE), r);

    section(&mut out, tr.t(keys::SECTION_PRODUCT_SUMMARY));
    let product = b.product_info.product.map(ProductType::code).unwrap_or(unknown);
    row(&mut out, tr.t(keys::SUMMARY_PRODUCT), product);
    row(
        &mut out,
        tr.t(keys::SUMMARY_TEMP_RANGE),
        format!(
            "{} → {}",
            d.temperature(b.product_info.incoming_temp_c),
            d.temperature(b.product_info.outgoing_temp_c)
        ),
    );
    let storage = b.storage.storage.map(StorageType::code).unwrap_or(unknown);
    row(&mut out, tr.t(keys::FIELD_STORAGE_TYPE), storage);
    let pull_down = match b.pull_down_estimate_h {
        Some(h) => format!("{h:.1} h"),
        None => tr.t(keys::VALUE_UNDEFINED).to_string(),
    };
    row(&mut out, tr.t(keys::SUMMARY_PULL_DOWN), pull_down);

    if !b.diagnostics.is_empty() {
        section(&mut out, tr.t(keys::SECTION_DIAGNOSTICS));
        for diag in &b.diagnostics {
            out.push_str(&format!("  - {}\n", tr.diagnostic(*diag)));
        }
    }
    out
}

/// 부하 내역 전체를 TOML로 직렬화한다. 값은 SI 그대로다.
pub fn render_toml(b: &LoadBreakdown) -> Result<String, ReportError> {
    Ok(toml::to_string_pretty(b)?)
}

pub fn render(
    b: &LoadBreakdown,
    format: OutputFormat,
    units: &DefaultUnits,
    tr: &Translator,
) -> Result<String, ReportError> {
    match format {
        OutputFormat::Text => Ok(render_text(b, units, tr)),
        OutputFormat::Toml => render_toml(b),
    }
}

/// 단열재 U값, 제품 열물성, 적재 계수 표를 출력용 문자열로 만든다.
pub fn render_tables(units: &DefaultUnits, tr: &Translator) -> String {
    let d = DisplayUnits::new(*units);
    let mut out = String::new();

    section(&mut out, tr.t(keys::TABLES_U_FACTOR_HEADING));
    out.push_str(&format!("  {:<10}", ""));
    for t in InsulationThickness::ALL {
        out.push_str(&format!("{:>10}", format!("{} mm", t.mm())));
    }
    out.push('\n');
    for ins in InsulationType::ALL {
        out.push_str(&format!("  {:<10}", ins.code()));
        for t in InsulationThickness::ALL {
            out.push_str(&format!("{:>10.3}", tables::u_factor(ins, t)));
        }
        out.push('\n');
    }
    out.push_str(&format!("  {}\n", tr.t(keys::INSULATION_RANKING_HEADING)));
    for key in [keys::RANK_PUF, keys::RANK_EPS, keys::RANK_ROCKWOOL] {
        out.push_str(&format!("    {}\n", tr.t(key)));
    }

    section(&mut out, tr.t(keys::TABLES_PRODUCT_HEADING));
    for p in ProductType::ALL {
        let props = p.properties();
        out.push_str(&format!("  {}\n", p.code()));
        row(
            &mut out,
            tr.t(keys::PROP_CP_ABOVE),
            format!("{:.2} kJ/kg·K", props.specific_heat_above_kj_per_kgk),
        );
        row(
            &mut out,
            tr.t(keys::PROP_CP_BELOW),
            format!("{:.2} kJ/kg·K", props.specific_heat_below_kj_per_kgk),
        );
        row(&mut out, tr.t(keys::PROP_LATENT), format!("{:.0} kJ/kg", props.latent_heat_kj_per_kg));
        row(&mut out, tr.t(keys::PROP_FREEZING), d.temperature(props.freezing_point_c));
        row(&mut out, tr.t(keys::PROP_DENSITY), format!("{:.0} kg/m³", props.density_kg_per_m3));
        row(
            &mut out,
            tr.t(keys::PROP_EFFICIENCY),
            format!("{:.0} %", props.storage_efficiency * 100.0),
        );
    }

    section(&mut out, tr.t(keys::TABLES_STORAGE_HEADING));
    for s in StorageType::ALL {
        row(&mut out, s.code(), format!("{:.2}", s.factor()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UnitSystem;
    use crate::engine::EvaluationInputs;
    use crate::engine::EngineSettings;

    #[test]
    fn text_report_lists_required_capacity() {
        let b = EvaluationInputs::default().evaluate(&EngineSettings::default());
        let tr = Translator::new("en");
        let text = render_text(&b, &DefaultUnits::default(), &tr);
        assert!(text.contains("Total Cooling Capacity Required"));
        assert!(text.contains(&format!("{:.2} kW", b.total_load_with_safety_kw)));
        assert!(!text.contains("[Warnings]"));
    }

    #[test]
    fn imperial_report_uses_tons() {
        let b = EvaluationInputs::default().evaluate(&EngineSettings::default());
        let tr = Translator::new("en");
        let text = render_text(&b, &DefaultUnits::preset(UnitSystem::Imperial), &tr);
        assert!(text.contains(" TR"));
        assert!(text.contains("°F"));
    }

    #[test]
    fn toml_output_keeps_si_values() {
        let b = EvaluationInputs::default().evaluate(&EngineSettings::default());
        let s = render_toml(&b).unwrap();
        assert!(s.contains("total_load_with_safety_kw"));
        assert!(s.contains("[transmission]"));
    }
}
