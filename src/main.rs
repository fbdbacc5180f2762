// src/main.rs
//
// Calculatrice à accumulateur — point d’entrée NATIF + WEB (WASM)
// ----------------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : réglages TOML + journal tracing + eframe::run_native
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>, réglages par défaut
//
// Côté WEB (WASM) : ton index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports, dead_code))]

use eframe::egui;

mod app;
mod noyau;
mod reglages;

use app::AppCalc;
use reglages::Reglages;

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    // Les réglages fournissent le filtre du journal : on les lit avant,
    // on journalise le résultat après.
    let chemin = Reglages::chemin_defaut();
    let chargement = Reglages::charger(Some(chemin.clone()));
    let reglages = match &chargement {
        Ok(Some(r)) => r.clone(),
        Ok(None) | Err(_) => Reglages::default(),
    };

    init_journal(&reglages.journal);

    match chargement {
        Ok(Some(_)) => tracing::info!(?chemin, "réglages chargés"),
        Ok(None) => tracing::info!(?chemin, "pas de fichier de réglages, valeurs par défaut"),
        Err(e) => tracing::warn!("réglages ignorés ({e}), valeurs par défaut"),
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&reglages.titre)
            .with_inner_size([reglages.largeur, reglages.hauteur])
            .with_min_inner_size([reglages.largeur_min, reglages.hauteur_min]),
        ..Default::default()
    };

    let titre = reglages.titre.clone();
    eframe::run_native(
        &titre,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(&reglages)))),
    )
}

/// RUST_LOG prioritaire, sinon la directive des réglages.
#[cfg(not(target_arch = "wasm32"))]
fn init_journal(directive: &str) {
    use tracing_subscriber::EnvFilter;

    let filtre = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt().with_env_filter(filtre).init();
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, Reglages};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        // Pas de système de fichiers : réglages par défaut
        let reglages = Reglages::default();

        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(&reglages.titre);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |_cc| Ok(Box::new(AppCalc::new(&reglages)))),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
