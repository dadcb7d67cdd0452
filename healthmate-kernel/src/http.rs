//! REST surface of the Healthmate kernel
//!
//! One route per screen of the companion app, plus the facility search and
//! the embedded map page. Every handler takes the content language as an
//! explicit query/body parameter (defaulting to the configured language)
//! and resolves text through the shared `Translator`; nothing here holds
//! language state.

use crate::analysis::SymptomAnalyzer;
use crate::locator::FacilityLocator;
use crate::map;
use crate::models::{Facility, FacilitySnapshot};
use crate::state::{Shared, TokenSeries};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use healthmate_core::lang::{Lang, Translator};
use healthmate_core::tips::ImmunityTip;
use healthmate_core::{food, geo, tips};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<Translator>,
    pub locator: Arc<FacilityLocator>,
    pub analyzer: Arc<SymptomAnalyzer>,
    pub last_search: Shared<Option<FacilitySnapshot>>,
    pub searches: TokenSeries,
    pub default_lang: Lang,
}

impl AppState {
    fn t(&self, lang: Lang, key: &str) -> String {
        self.translator.translate(lang, key).to_string()
    }
}

#[derive(Debug, Deserialize)]
struct LangParams {
    lang: Option<Lang>,
}

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/home", get(get_home))
        .route("/immunity", get(get_immunity))
        .route("/food-groups", get(get_food_groups))
        .route("/incompatible-foods", get(get_incompatible_foods))
        .route("/facilities", get(get_facilities))
        .route("/facilities/map", get(get_facility_map))
        .route("/analysis", post(post_analysis))
        .with_state(app_state)
}

// --- Home screen ---

#[derive(Serialize)]
struct HomeView {
    lang: &'static str,
    title: String,
    subtitle: String,
    symptom_placeholder: String,
    analysis_button: String,
    quick_checkup: QuickCheckupView,
    resources: ResourcesView,
}

#[derive(Serialize)]
struct QuickCheckupView {
    section: String,
    areas: Vec<String>,
}

#[derive(Serialize)]
struct ResourcesView {
    section: String,
    cards: Vec<ResourceCardView>,
}

#[derive(Serialize)]
struct ResourceCardView {
    tag: String,
    title: String,
    subtitle: String,
    route: &'static str,
}

const QUICK_CHECKUP_AREAS: &[&str] = &[
    "area_head_neck",
    "area_chest_lung",
    "area_fever_flu",
    "area_stomach_digestive",
    "area_joint_muscle",
    "area_skin_rash",
];

async fn get_home(
    State(app): State<AppState>,
    Query(params): Query<LangParams>,
) -> Json<HomeView> {
    let lang = params.lang.unwrap_or(app.default_lang);
    Json(HomeView {
        lang: lang.code(),
        title: app.t(lang, "title"),
        subtitle: app.t(lang, "subtitle"),
        symptom_placeholder: app.t(lang, "placeholder_symptoms"),
        analysis_button: app.t(lang, "button_start_analysis"),
        quick_checkup: QuickCheckupView {
            section: app.t(lang, "section_quick_checkup"),
            areas: QUICK_CHECKUP_AREAS
                .iter()
                .map(|key| app.t(lang, key))
                .collect(),
        },
        resources: ResourcesView {
            section: app.t(lang, "section_resources"),
            cards: vec![
                ResourceCardView {
                    tag: app.t(lang, "tag_vitamins"),
                    title: app.t(lang, "resource_immunity_title"),
                    subtitle: app.t(lang, "resource_immunity_subtitle"),
                    route: "/immunity",
                },
                ResourceCardView {
                    tag: app.t(lang, "tag_nutrition"),
                    title: app.t(lang, "resource_foodgroups_title"),
                    subtitle: app.t(lang, "resource_foodgroups_subtitle"),
                    route: "/food-groups",
                },
                ResourceCardView {
                    tag: app.t(lang, "tag_allergy"),
                    title: app.t(lang, "resource_incompatible_title"),
                    subtitle: app.t(lang, "resource_incompatible_subtitle"),
                    route: "/incompatible-foods",
                },
            ],
        },
    })
}

// --- Immunity screen ---

#[derive(Serialize)]
struct TipView {
    id: u32,
    icon: &'static str,
    icon_color: &'static str,
    title: &'static str,
    description: &'static str,
}

fn tip_view(tip: &'static ImmunityTip, lang: Lang) -> TipView {
    let content = tip.content(lang);
    TipView {
        id: tip.id,
        icon: tip.icon,
        icon_color: tip.icon_color,
        title: content.title,
        description: content.description,
    }
}

#[derive(Serialize)]
struct ImmunityView {
    title: String,
    season: geo::Season,
    header: &'static str,
    priority_section: String,
    priority_description: String,
    priority: Vec<TipView>,
    general_section: String,
    general_description: String,
    general: Vec<TipView>,
}

async fn get_immunity(
    State(app): State<AppState>,
    Query(params): Query<LangParams>,
) -> Json<ImmunityView> {
    let lang = params.lang.unwrap_or(app.default_lang);
    let month0 = u8::from(OffsetDateTime::now_utc().month()) - 1;
    let season = geo::season_for_month(month0);
    let selection = tips::seasonal_tips(season);
    Json(ImmunityView {
        title: app.t(lang, "resource_immunity_title"),
        season,
        header: selection.header.text(lang),
        priority_section: app.t(lang, "immunity_section_priority"),
        priority_description: app.t(lang, "immunity_description_priority"),
        priority: selection
            .priority
            .into_iter()
            .map(|tip| tip_view(tip, lang))
            .collect(),
        general_section: app.t(lang, "immunity_section_general"),
        general_description: app.t(lang, "immunity_description_general"),
        general: selection
            .general
            .into_iter()
            .map(|tip| tip_view(tip, lang))
            .collect(),
    })
}

// --- Food group screens ---

#[derive(Serialize)]
struct FoodGroupView {
    id: &'static str,
    icon: &'static str,
    icon_color: &'static str,
    name: &'static str,
    description: &'static str,
    examples: Vec<&'static str>,
}

#[derive(Serialize)]
struct SeasonalAdviceView {
    label: String,
    group: &'static str,
    icon: &'static str,
    tip: &'static str,
}

#[derive(Serialize)]
struct FoodGroupsView {
    title: String,
    // The screen header shows both language variants at once.
    heading: String,
    subheading: String,
    intro: String,
    examples_label: String,
    groups: Vec<FoodGroupView>,
    seasonal_advice: SeasonalAdviceView,
}

async fn get_food_groups(
    State(app): State<AppState>,
    Query(params): Query<LangParams>,
) -> Json<FoodGroupsView> {
    let lang = params.lang.unwrap_or(app.default_lang);
    let advice = food::seasonal_food_advice();
    Json(FoodGroupsView {
        title: app.t(lang, "resource_foodgroups_title"),
        heading: app.t(lang, "foodgroups_title_my"),
        subheading: app.t(lang, "foodgroups_title_en"),
        intro: app.t(lang, "foodgroups_intro"),
        examples_label: app.t(lang, "example_title"),
        groups: food::THREE_FOOD_GROUPS
            .iter()
            .map(|group| {
                let content = group.content(lang);
                FoodGroupView {
                    id: group.id,
                    icon: group.icon,
                    icon_color: group.icon_color,
                    name: content.name,
                    description: content.description,
                    examples: content.examples.to_vec(),
                }
            })
            .collect(),
        seasonal_advice: SeasonalAdviceView {
            label: app.t(lang, "seasonal_focus_suffix"),
            group: advice.group_name,
            icon: advice.icon,
            tip: advice.tip(lang),
        },
    })
}

#[derive(Serialize)]
struct PairView {
    id: u32,
    icon: &'static str,
    color: &'static str,
    pair: &'static str,
    example: &'static str,
    reason: &'static str,
}

#[derive(Serialize)]
struct IncompatibleFoodsView {
    title: String,
    header: String,
    description: String,
    example_prefix: String,
    reason_prefix: String,
    pairs: Vec<PairView>,
}

async fn get_incompatible_foods(
    State(app): State<AppState>,
    Query(params): Query<LangParams>,
) -> Json<IncompatibleFoodsView> {
    let lang = params.lang.unwrap_or(app.default_lang);
    Json(IncompatibleFoodsView {
        title: app.t(lang, "incompatible_foods_title"),
        header: app.t(lang, "incompatible_foods_header"),
        description: app.t(lang, "incompatible_foods_description"),
        example_prefix: app.t(lang, "example_prefix"),
        reason_prefix: app.t(lang, "reason_prefix"),
        pairs: food::INCOMPATIBLE_FOODS
            .iter()
            .map(|pair| {
                let content = pair.content(lang);
                PairView {
                    id: pair.id,
                    icon: pair.icon,
                    color: pair.color,
                    pair: content.pair,
                    example: content.example,
                    reason: content.reason,
                }
            })
            .collect(),
    })
}

// --- Facility search ---

#[derive(Debug, Deserialize)]
struct FacilityParams {
    lat: f64,
    lon: f64,
    lang: Option<Lang>,
}

#[derive(Serialize)]
struct FacilityView {
    id: i64,
    name: String,
    category: String,
    lat: f64,
    lon: f64,
    distance_km: f64,
    nearest: bool,
}

#[derive(Serialize)]
struct FacilitiesView {
    title: String,
    count: usize,
    message: Option<String>,
    facilities: Vec<FacilityView>,
}

#[derive(Serialize)]
struct FacilitiesErrorView {
    facilities: Vec<FacilityView>,
    error: String,
}

fn facility_view(app: &AppState, lang: Lang, index: usize, facility: &Facility) -> FacilityView {
    FacilityView {
        id: facility.id,
        name: facility
            .name
            .clone()
            .unwrap_or_else(|| app.t(lang, "facility_unnamed")),
        category: facility
            .category
            .clone()
            .unwrap_or_else(|| app.t(lang, "facility_unknown_type")),
        lat: facility.lat,
        lon: facility.lon,
        distance_km: facility.distance_km,
        nearest: index == 0,
    }
}

async fn get_facilities(
    State(app): State<AppState>,
    Query(params): Query<FacilityParams>,
) -> Result<Json<FacilitiesView>, (StatusCode, Json<FacilitiesErrorView>)> {
    let lang = params.lang.unwrap_or(app.default_lang);
    let token = app.searches.issue();

    match app.locator.search(params.lat, params.lon).await {
        Ok(facilities) => {
            // Apply only if no newer search was issued while this one was
            // in flight; the map page must never show stale results over
            // newer ones.
            if app.searches.is_current(token) {
                *app.last_search.lock() = Some(FacilitySnapshot {
                    center: (params.lat, params.lon),
                    facilities: facilities.clone(),
                    fetched_at: OffsetDateTime::now_utc(),
                });
            } else {
                debug!("discarding stale facility search (token {token})");
            }

            let message = facilities
                .is_empty()
                .then(|| app.t(lang, "facilities_empty"));
            Ok(Json(FacilitiesView {
                title: app.t(lang, "facilities_title"),
                count: facilities.len(),
                message,
                facilities: facilities
                    .iter()
                    .enumerate()
                    .map(|(index, facility)| facility_view(&app, lang, index, facility))
                    .collect(),
            }))
        }
        Err(e) => {
            warn!("facility search failed: {e}");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(FacilitiesErrorView {
                    facilities: Vec::new(),
                    error: e.to_string(),
                }),
            ))
        }
    }
}

async fn get_facility_map(State(app): State<AppState>) -> (StatusCode, Html<String>) {
    let snapshot = app.last_search.lock().clone();
    match snapshot {
        Some(snap) => {
            debug!(
                "rendering map from search fetched at {}",
                snap.fetched_at.format(&Rfc3339).unwrap_or_default()
            );
            (
                StatusCode::OK,
                Html(map::render_map_page(
                    snap.center.0,
                    snap.center.1,
                    &snap.facilities,
                )),
            )
        }
        None => (StatusCode::NOT_FOUND, Html(map::render_empty_page())),
    }
}

// --- Symptom analysis ---

#[derive(Debug, Deserialize)]
struct AnalysisRequest {
    symptoms: String,
    lang: Option<Lang>,
}

#[derive(Serialize)]
struct AnalysisView {
    analysis: String,
}

#[derive(Serialize)]
struct InputErrorView {
    title: String,
    message: String,
}

async fn post_analysis(
    State(app): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisView>, (StatusCode, Json<InputErrorView>)> {
    let lang = request.lang.unwrap_or(app.default_lang);
    let symptoms = request.symptoms.trim();
    if symptoms.is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(InputErrorView {
                title: app.t(lang, "alert_input_required_title"),
                message: app.t(lang, "alert_input_required_message"),
            }),
        ));
    }

    info!("analysis requested ({} chars)", symptoms.len());
    Ok(Json(AnalysisView {
        analysis: app.analyzer.analyze(symptoms).await,
    }))
}
