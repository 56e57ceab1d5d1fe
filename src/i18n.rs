use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::breakdown::Diagnostic;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const VALUE_UNDEFINED: &str = "general.undefined";
    pub const VALUE_UNKNOWN: &str = "general.unknown";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_ROOM: &str = "main_menu.room";
    pub const MAIN_MENU_CONDITIONS: &str = "main_menu.conditions";
    pub const MAIN_MENU_CONSTRUCTION: &str = "main_menu.construction";
    pub const MAIN_MENU_PRODUCT: &str = "main_menu.product";
    pub const MAIN_MENU_RESULTS: &str = "main_menu.results";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_KEEP_CURRENT: &str = "prompt.keep_current";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const PROJECT_SAVED: &str = "general.project_saved";
    pub const REPORT_WRITTEN: &str = "general.report_written";

    pub const ROOM_HEADING: &str = "room.heading";
    pub const CONDITIONS_HEADING: &str = "conditions.heading";
    pub const CONSTRUCTION_HEADING: &str = "construction.heading";
    pub const PRODUCT_HEADING: &str = "product.heading";
    pub const OPERATIONS_HEADING: &str = "operations.heading";

    pub const FIELD_LENGTH: &str = "field.length";
    pub const FIELD_WIDTH: &str = "field.width";
    pub const FIELD_HEIGHT: &str = "field.height";
    pub const FIELD_DOOR_WIDTH: &str = "field.door_width";
    pub const FIELD_DOOR_HEIGHT: &str = "field.door_height";
    pub const FIELD_EXTERNAL_TEMP: &str = "field.external_temp";
    pub const FIELD_INTERNAL_TEMP: &str = "field.internal_temp";
    pub const FIELD_OPERATING_HOURS: &str = "field.operating_hours";
    pub const FIELD_INSULATION_TYPE: &str = "field.insulation_type";
    pub const FIELD_INSULATION_THICKNESS: &str = "field.insulation_thickness";
    pub const FIELD_PRODUCT_TYPE: &str = "field.product_type";
    pub const FIELD_DAILY_LOAD: &str = "field.daily_load";
    pub const FIELD_INCOMING_TEMP: &str = "field.incoming_temp";
    pub const FIELD_OUTGOING_TEMP: &str = "field.outgoing_temp";
    pub const FIELD_STORAGE_TYPE: &str = "field.storage_type";
    pub const FIELD_PEOPLE: &str = "field.people";
    pub const FIELD_WORKING_HOURS: &str = "field.working_hours";
    pub const FIELD_DOOR_OPENINGS: &str = "field.door_openings";
    pub const FIELD_LIGHTING: &str = "field.lighting";
    pub const FIELD_EQUIPMENT: &str = "field.equipment";

    pub const CALC_WALL_AREA: &str = "calc.wall_area";
    pub const CALC_CEILING_AREA: &str = "calc.ceiling_area";
    pub const CALC_FLOOR_AREA: &str = "calc.floor_area";
    pub const CALC_DOOR_AREA: &str = "calc.door_area";
    pub const CALC_VOLUME: &str = "calc.volume";
    pub const CALC_U_FACTOR: &str = "calc.u_factor";
    pub const CALC_R_VALUE: &str = "calc.r_value";
    pub const CALC_DELTA_T: &str = "calc.delta_t";

    pub const PROP_CP_ABOVE: &str = "property.cp_above";
    pub const PROP_CP_BELOW: &str = "property.cp_below";
    pub const PROP_LATENT: &str = "property.latent";
    pub const PROP_FREEZING: &str = "property.freezing_point";
    pub const PROP_DENSITY: &str = "property.density";
    pub const PROP_EFFICIENCY: &str = "property.storage_efficiency";

    pub const INSULATION_RANKING_HEADING: &str = "insulation.ranking_heading";
    pub const RANK_PUF: &str = "insulation.rank_puf";
    pub const RANK_EPS: &str = "insulation.rank_eps";
    pub const RANK_ROCKWOOL: &str = "insulation.rank_rockwool";

    pub const REPORT_TITLE: &str = "report.title";
    pub const REPORT_DAILY_ENERGY: &str = "report.daily_energy";
    pub const SECTION_STORAGE: &str = "report.section_storage";
    pub const STORAGE_MAXIMUM: &str = "report.storage_maximum";
    pub const STORAGE_DAILY_LOAD: &str = "report.storage_daily_load";
    pub const STORAGE_UTILIZATION: &str = "report.storage_utilization";
    pub const SECTION_TRANSMISSION: &str = "report.section_transmission";
    pub const TRANSMISSION_WALLS: &str = "report.transmission_walls";
    pub const TRANSMISSION_CEILING: &str = "report.transmission_ceiling";
    pub const TRANSMISSION_FLOOR: &str = "report.transmission_floor";
    pub const SUBTOTAL_TRANSMISSION: &str = "report.subtotal_transmission";
    pub const SECTION_PRODUCT: &str = "report.section_product";
    pub const PRODUCT_MASS: &str = "report.product_mass";
    pub const PRODUCT_SENSIBLE_ABOVE: &str = "report.product_sensible_above";
    pub const PRODUCT_LATENT: &str = "report.product_latent";
    pub const PRODUCT_SENSIBLE_BELOW: &str = "report.product_sensible_below";
    pub const SUBTOTAL_PRODUCT: &str = "report.subtotal_product";
    pub const SECTION_AIR_CHANGE: &str = "report.section_air_change";
    pub const AIR_CHANGE_RATE: &str = "report.air_change_rate";
    pub const AIR_LOAD: &str = "report.air_load";
    pub const SECTION_DOOR: &str = "report.section_door";
    pub const DOOR_OPENINGS: &str = "report.door_openings";
    pub const DOOR_LOAD: &str = "report.door_load";
    pub const SECTION_INTERNAL: &str = "report.section_internal";
    pub const INTERNAL_PEOPLE: &str = "report.internal_people";
    pub const INTERNAL_LIGHTING: &str = "report.internal_lighting";
    pub const INTERNAL_EQUIPMENT: &str = "report.internal_equipment";
    pub const SUBTOTAL_INTERNAL: &str = "report.subtotal_internal";
    pub const SECTION_FINAL: &str = "report.section_final";
    pub const FINAL_TOTAL: &str = "report.final_total";
    pub const FINAL_SAFETY: &str = "report.final_safety";
    pub const FINAL_REQUIRED: &str = "report.final_required";
    pub const SECTION_ROOM_SUMMARY: &str = "report.section_room_summary";
    pub const SUMMARY_DIMENSIONS: &str = "report.summary_dimensions";
    pub const SUMMARY_DOOR: &str = "report.summary_door";
    pub const SECTION_CONSTRUCTION_SUMMARY: &str = "report.section_construction_summary";
    pub const SUMMARY_INSULATION: &str = "report.summary_insulation";
    pub const SUMMARY_THICKNESS: &str = "report.summary_thickness";
    pub const SECTION_PRODUCT_SUMMARY: &str = "report.section_product_summary";
    pub const SUMMARY_PRODUCT: &str = "report.summary_product";
    pub const SUMMARY_TEMP_RANGE: &str = "report.summary_temp_range";
    pub const SUMMARY_PULL_DOWN: &str = "report.summary_pull_down";
    pub const SECTION_DIAGNOSTICS: &str = "report.section_diagnostics";

    pub const DIAG_UNKNOWN_INSULATION: &str = "diagnostic.unknown_insulation_type";
    pub const DIAG_UNTABULATED_THICKNESS: &str = "diagnostic.untabulated_insulation_thickness";
    pub const DIAG_UNKNOWN_PRODUCT: &str = "diagnostic.unknown_product_type";
    pub const DIAG_UNKNOWN_STORAGE: &str = "diagnostic.unknown_storage_type";
    pub const DIAG_NEGATIVE_DELTA_T: &str = "diagnostic.negative_temperature_difference";
    pub const DIAG_ZERO_CAPACITY: &str = "diagnostic.zero_storage_capacity";
    pub const DIAG_NO_COOLING_LOAD: &str = "diagnostic.non_positive_cooling_load";
    pub const DIAG_OUT_OF_RANGE: &str = "diagnostic.input_out_of_range";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const TABLES_U_FACTOR_HEADING: &str = "tables.u_factor_heading";
    pub const TABLES_PRODUCT_HEADING: &str = "tables.product_heading";
    pub const TABLES_STORAGE_HEADING: &str = "tables.storage_heading";

    pub const GUI_OPEN: &str = "gui.open";
    pub const GUI_SAVE: &str = "gui.save";
    pub const GUI_RESET: &str = "gui.reset";
    pub const GUI_CALCULATED: &str = "gui.calculated";
    pub const GUI_THERMAL_PERFORMANCE: &str = "gui.thermal_performance";
    pub const GUI_PRODUCT_PROPERTIES: &str = "gui.product_properties";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 영어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)).unwrap_or("[missing translation]"),
            Language::En => en(key).unwrap_or("[missing translation]"),
        }
    }

    /// 진단 항목의 설명 문구.
    pub fn diagnostic(&self, diagnostic: Diagnostic) -> &str {
        self.t(diagnostic_key(diagnostic))
    }
}

pub fn diagnostic_key(diagnostic: Diagnostic) -> &'static str {
    use keys::*;
    match diagnostic {
        Diagnostic::UnknownInsulationType => DIAG_UNKNOWN_INSULATION,
        Diagnostic::UntabulatedInsulationThickness => DIAG_UNTABULATED_THICKNESS,
        Diagnostic::UnknownProductType => DIAG_UNKNOWN_PRODUCT,
        Diagnostic::UnknownStorageType => DIAG_UNKNOWN_STORAGE,
        Diagnostic::NegativeTemperatureDifference => DIAG_NEGATIVE_DELTA_T,
        Diagnostic::ZeroStorageCapacity => DIAG_ZERO_CAPACITY,
        Diagnostic::NonPositiveCoolingLoad => DIAG_NO_COOLING_LOAD,
        Diagnostic::InputOutOfRange => DIAG_OUT_OF_RANGE,
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵 또는 [섹션] 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        VALUE_UNDEFINED => "정의되지 않음",
        VALUE_UNKNOWN => "알 수 없음",
        MAIN_MENU_TITLE => "\n=== 냉동창고 부하 계산기 ===",
        MAIN_MENU_ROOM => "1) 방 치수",
        MAIN_MENU_CONDITIONS => "2) 설계 조건",
        MAIN_MENU_CONSTRUCTION => "3) 단열 사양",
        MAIN_MENU_PRODUCT => "4) 제품/운영 부하",
        MAIN_MENU_RESULTS => "5) 계산 결과",
        MAIN_MENU_SETTINGS => "6) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_KEEP_CURRENT => "엔터 = 현재값 유지",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        PROJECT_SAVED => "프로젝트를 저장했습니다:",
        REPORT_WRITTEN => "결과를 저장했습니다:",
        ROOM_HEADING => "\n-- 방 치수 --",
        CONDITIONS_HEADING => "\n-- 설계 조건 --",
        CONSTRUCTION_HEADING => "\n-- 단열 사양 --",
        PRODUCT_HEADING => "\n-- 제품 정보 --",
        OPERATIONS_HEADING => "\n-- 운영 부하 --",
        FIELD_LENGTH => "길이 [m]",
        FIELD_WIDTH => "폭 [m]",
        FIELD_HEIGHT => "높이 [m]",
        FIELD_DOOR_WIDTH => "문 폭 [m]",
        FIELD_DOOR_HEIGHT => "문 높이 [m]",
        FIELD_EXTERNAL_TEMP => "외기 온도 [°C]",
        FIELD_INTERNAL_TEMP => "실내 온도 [°C]",
        FIELD_OPERATING_HOURS => "운전 시간 [h/day]",
        FIELD_INSULATION_TYPE => "단열재 (PUF/EPS/Rockwool)",
        FIELD_INSULATION_THICKNESS => "단열 두께 [mm] (75/100/125/150/200)",
        FIELD_PRODUCT_TYPE => "제품 종류",
        FIELD_DAILY_LOAD => "일일 입고량 [kg]",
        FIELD_INCOMING_TEMP => "입고 온도 [°C]",
        FIELD_OUTGOING_TEMP => "출고 온도 [°C]",
        FIELD_STORAGE_TYPE => "적재 방식",
        FIELD_PEOPLE => "작업 인원 [명]",
        FIELD_WORKING_HOURS => "실내 작업 시간 [h]",
        FIELD_DOOR_OPENINGS => "일일 문 개방 횟수",
        FIELD_LIGHTING => "조명 부하 [W]",
        FIELD_EQUIPMENT => "장비 부하 [W]",
        CALC_WALL_AREA => "벽 면적",
        CALC_CEILING_AREA => "천장 면적",
        CALC_FLOOR_AREA => "바닥 면적",
        CALC_DOOR_AREA => "문 면적",
        CALC_VOLUME => "방 체적",
        CALC_U_FACTOR => "열관류율(U)",
        CALC_R_VALUE => "열저항(R)",
        CALC_DELTA_T => "온도차",
        PROP_CP_ABOVE => "비열(동결점 이상)",
        PROP_CP_BELOW => "비열(동결점 이하)",
        PROP_LATENT => "동결 잠열",
        PROP_FREEZING => "동결점",
        PROP_DENSITY => "밀도",
        PROP_EFFICIENCY => "적재 효율",
        INSULATION_RANKING_HEADING => "단열 성능 순위",
        RANK_PUF => "1. 폴리우레탄 폼(PUF) - 단열 성능 최상",
        RANK_EPS => "2. 발포 폴리스티렌(EPS) - 양호, 경제적",
        RANK_ROCKWOOL => "3. 락울 - 불연성, 단열 성능 낮음",
        REPORT_TITLE => "필요 냉동능력",
        REPORT_DAILY_ENERGY => "일일 에너지 사용량",
        SECTION_STORAGE => "저장 정보",
        STORAGE_MAXIMUM => "최대 저장량",
        STORAGE_DAILY_LOAD => "일일 입고량",
        STORAGE_UTILIZATION => "저장 이용률",
        SECTION_TRANSMISSION => "전열 부하",
        TRANSMISSION_WALLS => "벽",
        TRANSMISSION_CEILING => "천장",
        TRANSMISSION_FLOOR => "바닥",
        SUBTOTAL_TRANSMISSION => "전열 소계",
        SECTION_PRODUCT => "제품 부하",
        PRODUCT_MASS => "제품 질량",
        PRODUCT_SENSIBLE_ABOVE => "현열(동결점 이상)",
        PRODUCT_LATENT => "잠열(동결)",
        PRODUCT_SENSIBLE_BELOW => "현열(동결점 이하)",
        SUBTOTAL_PRODUCT => "제품 소계",
        SECTION_AIR_CHANGE => "환기 부하",
        AIR_CHANGE_RATE => "환기 횟수",
        AIR_LOAD => "침입 공기 부하",
        SECTION_DOOR => "문 개방 부하",
        DOOR_OPENINGS => "일일 개방 횟수",
        DOOR_LOAD => "문 침입 부하",
        SECTION_INTERNAL => "내부 부하",
        INTERNAL_PEOPLE => "인원 부하",
        INTERNAL_LIGHTING => "조명 부하",
        INTERNAL_EQUIPMENT => "장비/팬 부하",
        SUBTOTAL_INTERNAL => "내부 소계",
        SECTION_FINAL => "최종 계산",
        FINAL_TOTAL => "총 계산 부하",
        FINAL_SAFETY => "안전율(10%)",
        FINAL_REQUIRED => "최종 필요 능력",
        SECTION_ROOM_SUMMARY => "방 사양 요약",
        SUMMARY_DIMENSIONS => "치수",
        SUMMARY_DOOR => "문 크기",
        SECTION_CONSTRUCTION_SUMMARY => "단열 사양",
        SUMMARY_INSULATION => "단열재",
        SUMMARY_THICKNESS => "두께",
        SECTION_PRODUCT_SUMMARY => "제품 정보",
        SUMMARY_PRODUCT => "제품",
        SUMMARY_TEMP_RANGE => "온도 범위",
        SUMMARY_PULL_DOWN => "풀다운 시간(추정)",
        SECTION_DIAGNOSTICS => "주의",
        DIAG_UNKNOWN_INSULATION => "알 수 없는 단열재입니다. U값을 0으로 계산했습니다.",
        DIAG_UNTABULATED_THICKNESS => "표에 없는 단열 두께입니다. U값을 0으로 계산했습니다.",
        DIAG_UNKNOWN_PRODUCT => "알 수 없는 제품입니다. 열물성을 0으로 계산했습니다.",
        DIAG_UNKNOWN_STORAGE => "알 수 없는 적재 방식입니다. 적재 계수 1.0을 적용했습니다.",
        DIAG_NEGATIVE_DELTA_T => "실내 온도가 외기보다 높습니다. 전열/환기 부하가 음수입니다.",
        DIAG_ZERO_CAPACITY => "최대 저장량이 0입니다. 이용률을 0%로 표시합니다.",
        DIAG_NO_COOLING_LOAD => "총 냉동능력이 0 이하라 풀다운 시간을 계산할 수 없습니다.",
        DIAG_OUT_OF_RANGE => "너무 큰 입력값을 허용 한계(1e9)로 잘라 계산했습니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "현재 단위 시스템:",
        SETTINGS_OPTIONS => "1) SI  2) Imperial",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "단위 시스템이 다음으로 설정되었습니다:",
        TABLES_U_FACTOR_HEADING => "단열재별 열관류율 U [W/m²K]",
        TABLES_PRODUCT_HEADING => "제품 열물성",
        TABLES_STORAGE_HEADING => "적재 방식 계수",
        GUI_OPEN => "열기",
        GUI_SAVE => "저장",
        GUI_RESET => "기본값",
        GUI_CALCULATED => "계산값",
        GUI_THERMAL_PERFORMANCE => "열성능",
        GUI_PRODUCT_PROPERTIES => "제품 열물성",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        VALUE_UNDEFINED => "undefined",
        VALUE_UNKNOWN => "unknown",
        MAIN_MENU_TITLE => "\n=== Cold Storage Load Calculator ===",
        MAIN_MENU_ROOM => "1) Room dimensions",
        MAIN_MENU_CONDITIONS => "2) Design conditions",
        MAIN_MENU_CONSTRUCTION => "3) Construction",
        MAIN_MENU_PRODUCT => "4) Product & operations",
        MAIN_MENU_RESULTS => "5) Results",
        MAIN_MENU_SETTINGS => "6) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_KEEP_CURRENT => "enter = keep current",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        PROJECT_SAVED => "Project saved:",
        REPORT_WRITTEN => "Report written:",
        ROOM_HEADING => "\n-- Room Specifications --",
        CONDITIONS_HEADING => "\n-- Design Conditions --",
        CONSTRUCTION_HEADING => "\n-- Construction Details --",
        PRODUCT_HEADING => "\n-- Product Information --",
        OPERATIONS_HEADING => "\n-- Operational Loads --",
        FIELD_LENGTH => "Length [m]",
        FIELD_WIDTH => "Width [m]",
        FIELD_HEIGHT => "Height [m]",
        FIELD_DOOR_WIDTH => "Door width [m]",
        FIELD_DOOR_HEIGHT => "Door height [m]",
        FIELD_EXTERNAL_TEMP => "External temperature [°C]",
        FIELD_INTERNAL_TEMP => "Internal temperature [°C]",
        FIELD_OPERATING_HOURS => "Operating hours [h/day]",
        FIELD_INSULATION_TYPE => "Insulation (PUF/EPS/Rockwool)",
        FIELD_INSULATION_THICKNESS => "Insulation thickness [mm] (75/100/125/150/200)",
        FIELD_PRODUCT_TYPE => "Product type",
        FIELD_DAILY_LOAD => "Daily product load [kg]",
        FIELD_INCOMING_TEMP => "Product incoming temperature [°C]",
        FIELD_OUTGOING_TEMP => "Product outgoing temperature [°C]",
        FIELD_STORAGE_TYPE => "Storage type",
        FIELD_PEOPLE => "Number of people",
        FIELD_WORKING_HOURS => "Working hours inside room [h]",
        FIELD_DOOR_OPENINGS => "Daily door openings",
        FIELD_LIGHTING => "Lighting load [W]",
        FIELD_EQUIPMENT => "Equipment load [W]",
        CALC_WALL_AREA => "Wall area",
        CALC_CEILING_AREA => "Ceiling area",
        CALC_FLOOR_AREA => "Floor area",
        CALC_DOOR_AREA => "Door area",
        CALC_VOLUME => "Room volume",
        CALC_U_FACTOR => "U-factor",
        CALC_R_VALUE => "R-value",
        CALC_DELTA_T => "Temperature difference",
        PROP_CP_ABOVE => "Specific heat (above freezing)",
        PROP_CP_BELOW => "Specific heat (below freezing)",
        PROP_LATENT => "Latent heat of freezing",
        PROP_FREEZING => "Freezing point",
        PROP_DENSITY => "Density",
        PROP_EFFICIENCY => "Storage efficiency",
        INSULATION_RANKING_HEADING => "Performance ranking (best to good)",
        RANK_PUF => "1. Polyurethane Foam (PUF) - best thermal performance",
        RANK_EPS => "2. Expanded Polystyrene (EPS) - good performance, cost-effective",
        RANK_ROCKWOOL => "3. Rockwool - fire resistant, lower thermal performance",
        REPORT_TITLE => "Total Cooling Capacity Required",
        REPORT_DAILY_ENERGY => "Daily energy consumption",
        SECTION_STORAGE => "Storage Information",
        STORAGE_MAXIMUM => "Maximum storage capacity",
        STORAGE_DAILY_LOAD => "Current daily load",
        STORAGE_UTILIZATION => "Storage utilization",
        SECTION_TRANSMISSION => "Transmission Loads",
        TRANSMISSION_WALLS => "Walls",
        TRANSMISSION_CEILING => "Ceiling",
        TRANSMISSION_FLOOR => "Floor",
        SUBTOTAL_TRANSMISSION => "Subtotal transmission",
        SECTION_PRODUCT => "Product Load",
        PRODUCT_MASS => "Product mass",
        PRODUCT_SENSIBLE_ABOVE => "Sensible heat (above freezing)",
        PRODUCT_LATENT => "Latent heat (freezing)",
        PRODUCT_SENSIBLE_BELOW => "Sensible heat (below freezing)",
        SUBTOTAL_PRODUCT => "Subtotal product",
        SECTION_AIR_CHANGE => "Air Change Load",
        AIR_CHANGE_RATE => "Air change rate",
        AIR_LOAD => "Air infiltration load",
        SECTION_DOOR => "Door Opening Load",
        DOOR_OPENINGS => "Daily openings",
        DOOR_LOAD => "Door infiltration load",
        SECTION_INTERNAL => "Internal Loads",
        INTERNAL_PEOPLE => "Occupancy load",
        INTERNAL_LIGHTING => "Lighting load",
        INTERNAL_EQUIPMENT => "Equipment/fan load",
        SUBTOTAL_INTERNAL => "Subtotal internal",
        SECTION_FINAL => "Final Calculation",
        FINAL_TOTAL => "Total calculated load",
        FINAL_SAFETY => "Safety factor (10%)",
        FINAL_REQUIRED => "FINAL REQUIRED CAPACITY",
        SECTION_ROOM_SUMMARY => "Room Specifications Summary",
        SUMMARY_DIMENSIONS => "Dimensions",
        SUMMARY_DOOR => "Door size",
        SECTION_CONSTRUCTION_SUMMARY => "Construction Details",
        SUMMARY_INSULATION => "Insulation",
        SUMMARY_THICKNESS => "Thickness",
        SECTION_PRODUCT_SUMMARY => "Product Information",
        SUMMARY_PRODUCT => "Product",
        SUMMARY_TEMP_RANGE => "Temperature range",
        SUMMARY_PULL_DOWN => "Pull-down time (estimate)",
        SECTION_DIAGNOSTICS => "Warnings",
        DIAG_UNKNOWN_INSULATION => "Unknown insulation type; U-factor taken as 0.",
        DIAG_UNTABULATED_THICKNESS => "Insulation thickness not in table; U-factor taken as 0.",
        DIAG_UNKNOWN_PRODUCT => "Unknown product type; thermal properties taken as 0.",
        DIAG_UNKNOWN_STORAGE => "Unknown storage type; neutral factor 1.0 applied.",
        DIAG_NEGATIVE_DELTA_T => {
            "Internal temperature is above external; transmission and air loads are negative."
        }
        DIAG_ZERO_CAPACITY => "Maximum storage capacity is 0; utilization reported as 0%.",
        DIAG_NO_COOLING_LOAD => "Total capacity is not positive; pull-down time is undefined.",
        DIAG_OUT_OF_RANGE => "An input exceeded the allowed magnitude (1e9) and was clamped.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "Current unit system:",
        SETTINGS_OPTIONS => "1) SI  2) Imperial",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; unit system unchanged.",
        SETTINGS_SAVED => "Unit system changed to:",
        TABLES_U_FACTOR_HEADING => "U-factor by insulation [W/m²K]",
        TABLES_PRODUCT_HEADING => "Product thermal properties",
        TABLES_STORAGE_HEADING => "Storage type factors",
        GUI_OPEN => "Open",
        GUI_SAVE => "Save",
        GUI_RESET => "Defaults",
        GUI_CALCULATED => "Calculated values",
        GUI_THERMAL_PERFORMANCE => "Thermal performance",
        GUI_PRODUCT_PROPERTIES => "Product thermal properties",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_diagnostic_has_both_translations() {
        let all = [
            Diagnostic::UnknownInsulationType,
            Diagnostic::UntabulatedInsulationThickness,
            Diagnostic::UnknownProductType,
            Diagnostic::UnknownStorageType,
            Diagnostic::NegativeTemperatureDifference,
            Diagnostic::ZeroStorageCapacity,
            Diagnostic::NonPositiveCoolingLoad,
            Diagnostic::InputOutOfRange,
        ];
        for d in all {
            let key = diagnostic_key(d);
            assert!(ko(key).is_some(), "ko missing {key}");
            assert!(en(key).is_some(), "en missing {key}");
            assert!(key.ends_with(d.code()));
        }
    }

    #[test]
    fn resolve_prefers_cli_then_config() {
        assert_eq!(resolve_language("ko-KR", Some("en")), "ko");
        assert_eq!(resolve_language("auto", Some("en-us")), "en");
    }
}
