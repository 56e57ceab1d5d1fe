use std::io::{self, BufRead, ErrorKind, Write};

use crate::app::AppError;
use crate::config::{Config, UnitSystem};
use crate::construction::evaluate_construction;
use crate::geometry::compute_areas;
use crate::i18n::{keys, Translator};
use crate::project::{RawConditions, RawConstruction, RawProduct, RawProject, RawRoom};
use crate::report::DisplayUnits;
use crate::tables::{ProductType, StorageType};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Room,
    Conditions,
    Construction,
    Product,
    Results,
    Settings,
    Exit,
}

impl MenuChoice {
    /// 메뉴 번호를 선택지로 바꾼다.
    pub fn from_input(sel: &str) -> Option<Self> {
        match sel.trim() {
            "1" => Some(MenuChoice::Room),
            "2" => Some(MenuChoice::Conditions),
            "3" => Some(MenuChoice::Construction),
            "4" => Some(MenuChoice::Product),
            "5" => Some(MenuChoice::Results),
            "6" => Some(MenuChoice::Settings),
            "0" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_ROOM,
        keys::MAIN_MENU_CONDITIONS,
        keys::MAIN_MENU_CONSTRUCTION,
        keys::MAIN_MENU_PRODUCT,
        keys::MAIN_MENU_RESULTS,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        // 입력이 닫혔으면 종료로 처리해 프로젝트를 저장하고 빠져나간다.
        let sel = match read_line(tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            Err(AppError::Io(err)) if err.kind() == ErrorKind::UnexpectedEof => {
                println!();
                return Ok(MenuChoice::Exit);
            }
            Err(err) => return Err(err),
        };
        match MenuChoice::from_input(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 1단계: 방 치수를 입력받고 면적/체적을 보여준다.
pub fn edit_room(tr: &Translator, cfg: &Config, room: &mut RawRoom) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ROOM_HEADING));
    edit_field(tr, keys::FIELD_LENGTH, &mut room.length)?;
    edit_field(tr, keys::FIELD_WIDTH, &mut room.width)?;
    edit_field(tr, keys::FIELD_HEIGHT, &mut room.height)?;
    edit_field(tr, keys::FIELD_DOOR_WIDTH, &mut room.door_width)?;
    edit_field(tr, keys::FIELD_DOOR_HEIGHT, &mut room.door_height)?;

    let project = RawProject {
        room: room.clone(),
        ..RawProject::default()
    };
    let areas = compute_areas(&project.to_inputs().room);
    let d = DisplayUnits::new(cfg.default_units);
    println!("\n{}:", tr.t(keys::GUI_CALCULATED));
    print_value(tr, keys::CALC_WALL_AREA, d.area(areas.wall_m2));
    print_value(tr, keys::CALC_CEILING_AREA, d.area(areas.ceiling_m2));
    print_value(tr, keys::CALC_FLOOR_AREA, d.area(areas.floor_m2));
    print_value(tr, keys::CALC_DOOR_AREA, d.area(areas.door_m2));
    print_value(tr, keys::CALC_VOLUME, d.volume(areas.volume_m3));
    Ok(())
}

/// 2단계: 외기/실내 온도와 운전 시간.
pub fn edit_conditions(
    tr: &Translator,
    cfg: &Config,
    conditions: &mut RawConditions,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CONDITIONS_HEADING));
    edit_field(tr, keys::FIELD_EXTERNAL_TEMP, &mut conditions.external_temp)?;
    edit_field(tr, keys::FIELD_INTERNAL_TEMP, &mut conditions.internal_temp)?;
    edit_field(tr, keys::FIELD_OPERATING_HOURS, &mut conditions.operating_hours)?;

    let project = RawProject {
        conditions: conditions.clone(),
        ..RawProject::default()
    };
    let d = DisplayUnits::new(cfg.default_units);
    let dt = project.to_inputs().conditions.temperature_difference();
    print_value(tr, keys::CALC_DELTA_T, d.temperature_diff(dt));
    Ok(())
}

/// 3단계: 단열재 종류와 두께. 선택한 사양의 U/R 값을 보여준다.
pub fn edit_construction(
    tr: &Translator,
    cfg: &Config,
    construction: &mut RawConstruction,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CONSTRUCTION_HEADING));
    edit_field(tr, keys::FIELD_INSULATION_TYPE, &mut construction.insulation_type)?;
    edit_field(tr, keys::FIELD_INSULATION_THICKNESS, &mut construction.insulation_thickness)?;

    let project = RawProject {
        construction: construction.clone(),
        ..RawProject::default()
    };
    let rating = evaluate_construction(&project.to_inputs().construction);
    let d = DisplayUnits::new(cfg.default_units);
    println!("\n{}:", tr.t(keys::GUI_THERMAL_PERFORMANCE));
    print_value(tr, keys::CALC_U_FACTOR, d.u_factor(rating.u_factor_w_m2k));
    match rating.r_value_m2k_w {
        Some(r) => print_value(tr, keys::CALC_R_VALUE, d.r_value(r)),
        None => print_value(tr, keys::CALC_R_VALUE, tr.t(keys::VALUE_UNDEFINED).to_string()),
    }
    println!("{}", tr.t(keys::INSULATION_RANKING_HEADING));
    for key in [keys::RANK_PUF, keys::RANK_EPS, keys::RANK_ROCKWOOL] {
        println!("  {}", tr.t(key));
    }
    Ok(())
}

/// 4단계: 제품 정보와 운영 부하.
pub fn edit_product(
    tr: &Translator,
    cfg: &Config,
    product: &mut RawProduct,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PRODUCT_HEADING));
    let codes: Vec<&str> = ProductType::ALL.iter().map(|p| p.code()).collect();
    println!("  ({})", codes.join(" / "));
    edit_field(tr, keys::FIELD_PRODUCT_TYPE, &mut product.product_type)?;
    edit_field(tr, keys::FIELD_DAILY_LOAD, &mut product.daily_load)?;
    edit_field(tr, keys::FIELD_INCOMING_TEMP, &mut product.incoming_temp)?;
    edit_field(tr, keys::FIELD_OUTGOING_TEMP, &mut product.outgoing_temp)?;
    let storages: Vec<&str> = StorageType::ALL.iter().map(|s| s.code()).collect();
    println!("  ({})", storages.join(" / "));
    edit_field(tr, keys::FIELD_STORAGE_TYPE, &mut product.storage_type)?;

    if let Some(p) = ProductType::from_code(&product.product_type) {
        let props = p.properties();
        let d = DisplayUnits::new(cfg.default_units);
        println!("\n{}:", tr.t(keys::GUI_PRODUCT_PROPERTIES));
        print_value(
            tr,
            keys::PROP_CP_ABOVE,
            format!("{:.2} kJ/kg·K", props.specific_heat_above_kj_per_kgk),
        );
        print_value(
            tr,
            keys::PROP_CP_BELOW,
            format!("{:.2} kJ/kg·K", props.specific_heat_below_kj_per_kgk),
        );
        print_value(tr, keys::PROP_LATENT, format!("{:.0} kJ/kg", props.latent_heat_kj_per_kg));
        print_value(tr, keys::PROP_FREEZING, d.temperature(props.freezing_point_c));
    }

    println!("{}", tr.t(keys::OPERATIONS_HEADING));
    edit_field(tr, keys::FIELD_PEOPLE, &mut product.number_of_people)?;
    edit_field(tr, keys::FIELD_WORKING_HOURS, &mut product.working_hours)?;
    edit_field(tr, keys::FIELD_DOOR_OPENINGS, &mut product.door_openings)?;
    edit_field(tr, keys::FIELD_LIGHTING, &mut product.lighting_wattage)?;
    edit_field(tr, keys::FIELD_EQUIPMENT, &mut product.equipment_load)?;
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {:?}", tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM), cfg.unit_system);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    let system = match sel.trim() {
        "1" => UnitSystem::SI,
        "2" => UnitSystem::Imperial,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    };
    cfg.apply_unit_preset(system);
    println!("{} {:?}", tr.t(keys::SETTINGS_SAVED), cfg.unit_system);
    Ok(())
}

/// 현재값을 보여주고 새 값을 받는다. 빈 입력이면 현재값을 유지한다.
fn edit_field(tr: &Translator, label_key: &str, value: &mut String) -> Result<(), AppError> {
    let prompt = format!(
        "{} [{}] ({}): ",
        tr.t(label_key),
        value,
        tr.t(keys::PROMPT_KEEP_CURRENT)
    );
    let input = read_line(&prompt)?;
    if let Some(new_value) = accept_input(&input) {
        *value = new_value;
    }
    Ok(())
}

/// 입력 줄에서 앞뒤 공백을 지운다. 비어 있으면 `None`.
fn accept_input(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn print_value(tr: &Translator, label_key: &str, value: String) {
    println!("  {:<30} {value}", tr.t(label_key));
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    read_from(&mut io::stdin().lock())
}

/// 한 줄을 읽는다. 0바이트(EOF)면 `UnexpectedEof` 입출력 오류.
fn read_from<R: BufRead>(reader: &mut R) -> Result<String, AppError> {
    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Err(AppError::Io(ErrorKind::UnexpectedEof.into()));
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_numbers_map_to_steps() {
        assert_eq!(MenuChoice::from_input("1\n"), Some(MenuChoice::Room));
        assert_eq!(MenuChoice::from_input(" 5 "), Some(MenuChoice::Results));
        assert_eq!(MenuChoice::from_input("0"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_input("9"), None);
    }

    #[test]
    fn closed_input_is_reported_as_eof() {
        let mut reader = io::Cursor::new("6\n");
        assert_eq!(read_from(&mut reader).unwrap(), "6\n");
        match read_from(&mut reader) {
            Err(AppError::Io(err)) => assert_eq!(err.kind(), ErrorKind::UnexpectedEof),
            other => panic!("expected eof, got {other:?}"),
        }
    }

    #[test]
    fn blank_input_keeps_current_value() {
        assert_eq!(accept_input("\n"), None);
        assert_eq!(accept_input("  12.5 \r\n"), Some("12.5".to_string()));
    }
}
