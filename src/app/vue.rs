// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Adaptateur mince : lit l’état de l’accumulateur à chaque frame, et
// transforme les clics du pavé en Touche (AppCalc::appuyer).
//
// Disposition : deux lignes d’affichage (expression + valeur), pavé 5×4,
// historique repliable.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Touche, PAVE};

const HAUTEUR_TOUCHE: f32 = 52.0;
const TAILLE_TOUCHE: f32 = 22.0;
const TAILLE_AFFICHAGE: f32 = 34.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(&self.titre);
                });
                ui.add_space(10.0);

                self.ui_affichage(ui);

                ui.add_space(10.0);

                self.ui_pave(ui);

                ui.add_space(10.0);
                ui.separator();

                self.ui_historique(ui);
            });
    }

    fn ui_affichage(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                // Ligne d’expression (mémoire + opérateur), discrète
                Self::ligne_droite(
                    ui,
                    egui::RichText::new(self.accumulateur.ligne_expression())
                        .monospace()
                        .weak(),
                );

                Self::ligne_droite(
                    ui,
                    egui::RichText::new(&self.accumulateur.affichage)
                        .monospace()
                        .size(TAILLE_AFFICHAGE)
                        .strong(),
                );
            });
    }

    fn ligne_droite(ui: &mut egui::Ui, texte: egui::RichText) {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(egui::Label::new(texte).truncate());
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let ecart = ui.spacing().item_spacing.x;
        let largeur = ((ui.available_width() - 3.0 * ecart) / 4.0).max(40.0);

        for rangee in PAVE {
            ui.horizontal(|ui| {
                for &touche in rangee {
                    // "0" occupe deux colonnes sur la dernière rangée
                    let w = if rangee.len() == 3 && touche == Touche::Chiffre(0) {
                        2.0 * largeur + ecart
                    } else {
                        largeur
                    };
                    self.bouton(ui, touche, w);
                }
            });
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche, largeur: f32) {
        let texte = egui::RichText::new(touche.libelle()).size(TAILLE_TOUCHE);
        let mut bouton = egui::Button::new(texte);

        if matches!(touche, Touche::Operateur(_) | Touche::Egal) {
            bouton = bouton.fill(ui.visuals().selection.bg_fill);
        }

        let resp = ui.add_sized([largeur, HAUTEUR_TOUCHE], bouton);
        if resp.clicked() {
            self.appuyer(touche);
        }
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Historique")
            .default_open(false)
            .show(ui, |ui| {
                if self.historique.is_empty() {
                    ui.weak("aucun calcul");
                    return;
                }

                for calcul in self.historique.recents() {
                    ui.monospace(calcul.ligne());
                }

                ui.add_space(4.0);
                if ui.button("Effacer l’historique").clicked() {
                    self.vider_historique();
                }
            });
    }
}
