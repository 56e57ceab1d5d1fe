#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use cold_storage_toolbox::{
    config::{self, UnitSystem},
    i18n::{self, keys},
    project::RawProject,
    report::{self, DisplayUnits},
    repository::{ProjectRepository, TomlFileRepository},
    tables::{InsulationThickness, InsulationType, ProductType, StorageType},
    telemetry, LoadBreakdown,
};
use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "cold_storage_toolbox")]
struct Args {
    /// 표시 언어 (auto/ko/en)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    #[arg(long, default_value = TomlFileRepository::DEFAULT_FILE)]
    project: PathBuf,
}

fn main() -> Result<(), eframe::Error> {
    telemetry::init_tracing("info");
    let args = Args::parse();

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1000.0, 720.0]);
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let mut app_cfg = config::load_or_default_from(&args.config).unwrap_or_else(|e| {
        warn!("config load failed, using defaults: {e}");
        config::Config::default()
    });
    app_cfg.language = i18n::resolve_language(&args.lang, Some(app_cfg.language.as_str()));
    let repo = TomlFileRepository::new(&args.project);
    let project = repo.load().unwrap_or_else(|e| {
        warn!("project load failed, using defaults: {e}");
        RawProject::default()
    });
    let config_path = args.config;

    eframe::run_native(
        "Cold Storage Toolbox",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                warn!("{e}");
            }
            Box::new(GuiApp::new(app_cfg, config_path, repo, project))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 한글 라벨을 위해 시스템 폰트를 찾아 등록한다. 못 찾으면 egui 기본 폰트를 유지한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let asset_path = Path::new("assets/fonts/malgun.ttf");
    if asset_path.exists() {
        let bytes = fs::read(asset_path).map_err(|e| format!("Failed to read font file: {e}"))?;
        apply_font_bytes(ctx, bytes, "korean_font");
        return Ok(());
    }

    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["malgun.ttf", "gulim.ttc"] {
            candidates.push(fonts.join(cand));
        }
    }
    candidates.push(PathBuf::from("/usr/share/fonts/truetype/nanum/NanumGothic.ttf"));
    candidates.push(PathBuf::from("/System/Library/Fonts/AppleSDGothicNeo.ttc"));

    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }
    Err("Korean font not found; using default font".into())
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_owned(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, name.to_owned());
    }
    ctx.set_fonts(fonts);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Room,
    Conditions,
    Construction,
    Product,
    Results,
}

struct GuiApp {
    config: config::Config,
    config_path: PathBuf,
    tr: i18n::Translator,
    repo: TomlFileRepository,
    project: RawProject,
    breakdown: LoadBreakdown,
    tab: Tab,
    status: Option<String>,
}

impl GuiApp {
    fn new(
        config: config::Config,
        config_path: PathBuf,
        repo: TomlFileRepository,
        project: RawProject,
    ) -> Self {
        let tr = i18n::Translator::new_with_pack(&config.language, None);
        let breakdown = project.to_inputs().evaluate(&config.engine);
        Self {
            config,
            config_path,
            tr,
            repo,
            project,
            breakdown,
            tab: Tab::Room,
            status: None,
        }
    }

    /// 입력이 바뀔 때마다 전체를 다시 계산한다.
    fn recompute(&mut self) {
        self.breakdown = self.project.to_inputs().evaluate(&self.config.engine);
    }

    fn apply_unit_preset(&mut self, system: UnitSystem) {
        self.config.apply_unit_preset(system);
        if let Err(e) = self.config.save_to(&self.config_path) {
            self.status = Some(format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)));
        }
    }

    fn save_project(&mut self) {
        self.status = Some(match self.repo.save(&self.project) {
            Ok(()) => format!("{} {}", self.tr.t(keys::PROJECT_SAVED), self.repo.path().display()),
            Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
        });
    }

    fn open_project(&mut self, path: PathBuf) {
        let repo = TomlFileRepository::new(path);
        match repo.load() {
            Ok(project) => {
                info!(path = %repo.path().display(), "project opened");
                self.project = project;
                self.repo = repo;
                self.recompute();
                self.status = None;
            }
            Err(e) => self.status = Some(format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX))),
        }
    }

    fn display(&self) -> DisplayUnits {
        DisplayUnits::new(self.config.default_units)
    }

    fn ui_top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(self.tr.t(keys::REPORT_TITLE));
            ui.strong(self.display().power(self.breakdown.total_load_with_safety_kw));
            ui.separator();
            if ui.button(self.tr.t(keys::GUI_OPEN)).clicked() {
                if let Some(path) = FileDialog::new().add_filter("TOML", &["toml"]).pick_file() {
                    self.open_project(path);
                }
            }
            if ui.button(self.tr.t(keys::GUI_SAVE)).clicked() {
                if let Some(path) = FileDialog::new()
                    .add_filter("TOML", &["toml"])
                    .set_file_name(TomlFileRepository::DEFAULT_FILE)
                    .save_file()
                {
                    self.repo = TomlFileRepository::new(path);
                    self.save_project();
                }
            }
            if ui.button(self.tr.t(keys::GUI_RESET)).clicked() {
                self.project = RawProject::default();
                self.recompute();
            }
            ui.separator();
            let mut system = self.config.unit_system;
            egui::ComboBox::from_id_source("unit_system")
                .selected_text(format!("{system:?}"))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut system, UnitSystem::SI, "SI");
                    ui.selectable_value(&mut system, UnitSystem::Imperial, "Imperial");
                });
            if system != self.config.unit_system {
                self.apply_unit_preset(system);
            }
        });
        if let Some(status) = &self.status {
            ui.small(status.as_str());
        }
    }

    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tabs = [
            (Tab::Room, keys::MAIN_MENU_ROOM),
            (Tab::Conditions, keys::MAIN_MENU_CONDITIONS),
            (Tab::Construction, keys::MAIN_MENU_CONSTRUCTION),
            (Tab::Product, keys::MAIN_MENU_PRODUCT),
            (Tab::Results, keys::MAIN_MENU_RESULTS),
        ];
        for (tab, key) in tabs {
            ui.selectable_value(&mut self.tab, tab, self.tr.t(key));
        }
    }

    fn ui_room(&mut self, ui: &mut egui::Ui) -> bool {
        let tr = &self.tr;
        let room = &mut self.project.room;
        let mut changed = false;
        egui::Grid::new("room_grid").num_columns(2).show(ui, |ui| {
            changed |= text_row(ui, tr.t(keys::FIELD_LENGTH), &mut room.length);
            changed |= text_row(ui, tr.t(keys::FIELD_WIDTH), &mut room.width);
            changed |= text_row(ui, tr.t(keys::FIELD_HEIGHT), &mut room.height);
            changed |= text_row(ui, tr.t(keys::FIELD_DOOR_WIDTH), &mut room.door_width);
            changed |= text_row(ui, tr.t(keys::FIELD_DOOR_HEIGHT), &mut room.door_height);
        });
        ui.separator();
        ui.strong(self.tr.t(keys::GUI_CALCULATED));
        let d = self.display();
        let a = self.breakdown.areas;
        egui::Grid::new("room_calc").num_columns(2).show(ui, |ui| {
            value_row(ui, self.tr.t(keys::CALC_WALL_AREA), d.area(a.wall_m2));
            value_row(ui, self.tr.t(keys::CALC_CEILING_AREA), d.area(a.ceiling_m2));
            value_row(ui, self.tr.t(keys::CALC_FLOOR_AREA), d.area(a.floor_m2));
            value_row(ui, self.tr.t(keys::CALC_DOOR_AREA), d.area(a.door_m2));
            value_row(ui, self.tr.t(keys::CALC_VOLUME), d.volume(a.volume_m3));
        });
        changed
    }

    fn ui_conditions(&mut self, ui: &mut egui::Ui) -> bool {
        let tr = &self.tr;
        let cond = &mut self.project.conditions;
        let mut changed = false;
        egui::Grid::new("cond_grid").num_columns(2).show(ui, |ui| {
            changed |= text_row(ui, tr.t(keys::FIELD_EXTERNAL_TEMP), &mut cond.external_temp);
            changed |= text_row(ui, tr.t(keys::FIELD_INTERNAL_TEMP), &mut cond.internal_temp);
            changed |= text_row(ui, tr.t(keys::FIELD_OPERATING_HOURS), &mut cond.operating_hours);
        });
        ui.separator();
        let d = self.display();
        egui::Grid::new("cond_calc").num_columns(2).show(ui, |ui| {
            value_row(
                ui,
                self.tr.t(keys::CALC_DELTA_T),
                d.temperature_diff(self.breakdown.temperature_difference_k),
            );
        });
        changed
    }

    fn ui_construction(&mut self, ui: &mut egui::Ui) -> bool {
        let tr = &self.tr;
        let cons = &mut self.project.construction;
        let mut changed = false;
        egui::Grid::new("cons_grid").num_columns(2).show(ui, |ui| {
            ui.label(tr.t(keys::FIELD_INSULATION_TYPE));
            let codes: Vec<&str> = InsulationType::ALL.iter().map(|i| i.code()).collect();
            changed |= code_combo(ui, "insulation_type", &codes, &mut cons.insulation_type);
            ui.end_row();
            ui.label(tr.t(keys::FIELD_INSULATION_THICKNESS));
            let mm: Vec<String> = InsulationThickness::ALL
                .iter()
                .map(|t| t.mm().to_string())
                .collect();
            let mm_refs: Vec<&str> = mm.iter().map(String::as_str).collect();
            changed |= code_combo(
                ui,
                "insulation_thickness",
                &mm_refs,
                &mut cons.insulation_thickness,
            );
            ui.end_row();
        });
        ui.separator();
        ui.strong(self.tr.t(keys::GUI_THERMAL_PERFORMANCE));
        let d = self.display();
        let rating = self.breakdown.construction;
        egui::Grid::new("cons_calc").num_columns(2).show(ui, |ui| {
            value_row(ui, self.tr.t(keys::CALC_U_FACTOR), d.u_factor(rating.u_factor_w_m2k));
            let r = rating
                .r_value_m2k_w
                .map(|r| d.r_value(r))
                .unwrap_or_else(|| self.tr.t(keys::VALUE_UNDEFINED).to_string());
            value_row(ui, self.tr.t(keys::CALC_R_VALUE), r);
        });
        ui.add_space(8.0);
        ui.label(self.tr.t(keys::INSULATION_RANKING_HEADING));
        for key in [keys::RANK_PUF, keys::RANK_EPS, keys::RANK_ROCKWOOL] {
            ui.small(self.tr.t(key));
        }
        changed
    }

    fn ui_product(&mut self, ui: &mut egui::Ui) -> bool {
        let tr = &self.tr;
        let prod = &mut self.project.product;
        let mut changed = false;
        ui.strong(tr.t(keys::PRODUCT_HEADING).trim());
        egui::Grid::new("prod_grid").num_columns(2).show(ui, |ui| {
            ui.label(tr.t(keys::FIELD_PRODUCT_TYPE));
            let codes: Vec<&str> = ProductType::ALL.iter().map(|p| p.code()).collect();
            changed |= code_combo(ui, "product_type", &codes, &mut prod.product_type);
            ui.end_row();
            changed |= text_row(ui, tr.t(keys::FIELD_DAILY_LOAD), &mut prod.daily_load);
            changed |= text_row(ui, tr.t(keys::FIELD_INCOMING_TEMP), &mut prod.incoming_temp);
            changed |= text_row(ui, tr.t(keys::FIELD_OUTGOING_TEMP), &mut prod.outgoing_temp);
            ui.label(tr.t(keys::FIELD_STORAGE_TYPE));
            let storages: Vec<&str> = StorageType::ALL.iter().map(|s| s.code()).collect();
            changed |= code_combo(ui, "storage_type", &storages, &mut prod.storage_type);
            ui.end_row();
        });
        ui.separator();
        ui.strong(tr.t(keys::OPERATIONS_HEADING).trim());
        egui::Grid::new("ops_grid").num_columns(2).show(ui, |ui| {
            changed |= text_row(ui, tr.t(keys::FIELD_PEOPLE), &mut prod.number_of_people);
            changed |= text_row(ui, tr.t(keys::FIELD_WORKING_HOURS), &mut prod.working_hours);
            changed |= text_row(ui, tr.t(keys::FIELD_DOOR_OPENINGS), &mut prod.door_openings);
            changed |= text_row(ui, tr.t(keys::FIELD_LIGHTING), &mut prod.lighting_wattage);
            changed |= text_row(ui, tr.t(keys::FIELD_EQUIPMENT), &mut prod.equipment_load);
        });
        ui.separator();
        ui.strong(self.tr.t(keys::GUI_PRODUCT_PROPERTIES));
        let props = self.breakdown.product_info.properties;
        let d = self.display();
        egui::Grid::new("prod_props").num_columns(2).show(ui, |ui| {
            value_row(
                ui,
                self.tr.t(keys::PROP_CP_ABOVE),
                format!("{:.2} kJ/kg·K", props.specific_heat_above_kj_per_kgk),
            );
            value_row(
                ui,
                self.tr.t(keys::PROP_CP_BELOW),
                format!("{:.2} kJ/kg·K", props.specific_heat_below_kj_per_kgk),
            );
            value_row(
                ui,
                self.tr.t(keys::PROP_LATENT),
                format!("{:.0} kJ/kg", props.latent_heat_kj_per_kg),
            );
            value_row(ui, self.tr.t(keys::PROP_FREEZING), d.temperature(props.freezing_point_c));
        });
        ui.separator();
        ui.strong(self.tr.t(keys::SECTION_STORAGE));
        let storage = self.breakdown.storage;
        egui::Grid::new("prod_storage").num_columns(2).show(ui, |ui| {
            value_row(ui, self.tr.t(keys::STORAGE_MAXIMUM), d.mass(storage.maximum_kg));
            value_row(
                ui,
                self.tr.t(keys::STORAGE_UTILIZATION),
                format!("{:.1} %", storage.utilization_pct),
            );
        });
        changed
    }

    fn ui_results(&mut self, ui: &mut egui::Ui) {
        let text = report::render_text(&self.breakdown, &self.config.default_units, &self.tr);
        ui.monospace(text);
    }
}

fn text_row(ui: &mut egui::Ui, label: &str, value: &mut String) -> bool {
    ui.label(label);
    let changed = ui.text_edit_singleline(value).changed();
    ui.end_row();
    changed
}

fn value_row(ui: &mut egui::Ui, label: &str, value: String) {
    ui.label(label);
    ui.monospace(value);
    ui.end_row();
}

/// 코드 목록 콤보박스. 현재 문자열이 목록에 없으면 그대로 표시한다.
fn code_combo(ui: &mut egui::Ui, id: &str, codes: &[&str], value: &mut String) -> bool {
    let before = value.clone();
    egui::ComboBox::from_id_source(id)
        .selected_text(value.as_str())
        .show_ui(ui, |ui| {
            for code in codes {
                ui.selectable_value(value, (*code).to_string(), *code);
            }
        });
    *value != before
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            self.ui_top_bar(ui);
        });

        // 단계를 옮길 때마다 입력을 저장한다
        let prev_tab = self.tab;
        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(200.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });
        if self.tab != prev_tab {
            self.save_project();
        }

        let mut changed = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Room => changed = self.ui_room(ui),
                    Tab::Conditions => changed = self.ui_conditions(ui),
                    Tab::Construction => changed = self.ui_construction(ui),
                    Tab::Product => changed = self.ui_product(ui),
                    Tab::Results => self.ui_results(ui),
                });
        });
        if changed {
            self.recompute();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cold_storage_toolbox::EvaluationInputs;

    fn app() -> GuiApp {
        let dir = std::env::temp_dir().join("cold_storage_gui_test");
        GuiApp::new(
            config::Config::default(),
            dir.join("config.toml"),
            TomlFileRepository::new(dir.join("project.toml")),
            RawProject::default(),
        )
    }

    #[test]
    fn starts_on_room_tab_with_default_results() {
        let app = app();
        assert_eq!(app.tab, Tab::Room);
        let expected = EvaluationInputs::default().evaluate(&config::Config::default().engine);
        assert_eq!(app.breakdown, expected);
    }

    #[test]
    fn editing_a_field_changes_results_after_recompute() {
        let mut app = app();
        let before = app.breakdown.total_load_with_safety_kw;
        app.project.room.length = "8".into();
        app.recompute();
        assert!(app.breakdown.total_load_with_safety_kw > before);
        assert!((app.breakdown.areas.floor_m2 - 24.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_product_text_is_kept_and_flagged() {
        let mut app = app();
        app.project.product.product_type = "Cheese".into();
        app.recompute();
        assert_eq!(app.project.product.product_type, "Cheese");
        assert!(app.breakdown.has(cold_storage_toolbox::Diagnostic::UnknownProductType));
    }
}
