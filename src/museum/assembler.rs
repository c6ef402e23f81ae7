//! Deck assembly.
//!
//! Slides are created in their final order: cover, menu, then history,
//! clothing and video for each dance. Home buttons point back to the menu,
//! which already exists when they are drawn, so they are wired immediately.
//! Menu buttons point forward to slides that do not exist yet; their handles
//! are kept and wired once every dance has its slides.

use super::builders::{ButtonStyle, add_text_box, add_title, make_button};
use super::config::GeneratorConfig;
use super::content::{Dance, DanceCatalog};
use super::error::Result;
use super::layout::{self, MenuGrid};
use crate::ooxml::pptx::{ClickAction, MutablePresentation, ShapeRef, SlideLayout, SlideRef};
use log::{debug, info, warn};
use std::path::Path;

pub const DECK_TITLE: &str = "Museo Digital de las Danzas Peruanas";
pub const COVER_TEXT: &str = "Tema: Identidad\nPresentación interactiva (E-Book).";
pub const MENU_TITLE: &str = "Menú - Selecciona una danza";
pub const HOME_LABEL: &str = "Inicio";
pub const VIDEO_LABEL: &str = "Ver video";
pub const VIDEO_INSTRUCTIONS: &str =
    "Haz clic en 'Ver video' para abrir el enlace en tu navegador (requiere conexión a Internet).";

pub fn history_title(name: &str) -> String {
    format!("{} — Historia", name)
}

pub fn clothing_title(name: &str) -> String {
    format!("{} — Vestimenta", name)
}

pub fn video_title(name: &str) -> String {
    format!("{} — Video", name)
}

/// Handles to everything created for one dance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanceSlides {
    pub name: String,
    pub menu_button: ShapeRef,
    pub history: SlideRef,
    pub clothing: SlideRef,
    pub video: SlideRef,
    pub video_button: ShapeRef,
    /// Home buttons of the history, clothing and video slides
    pub home_buttons: [ShapeRef; 3],
}

/// An assembled, not yet saved deck.
#[derive(Debug)]
pub struct BuiltDeck {
    pub presentation: MutablePresentation,
    pub cover: SlideRef,
    pub menu: SlideRef,
    pub dances: Vec<DanceSlides>,
}

impl BuiltDeck {
    pub fn slide_count(&self) -> usize {
        self.presentation.slide_count()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.presentation.to_bytes()?)
    }

    /// Write the deck to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.presentation.save(path.as_ref())?;
        info!(
            "Presentation written to {} ({} slides)",
            path.as_ref().display(),
            self.slide_count()
        );
        Ok(())
    }
}

struct PendingDance<'a> {
    dance: &'a Dance,
    menu_button: ShapeRef,
}

/// Assemble the deck for `catalog`.
pub fn build_deck(catalog: &DanceCatalog, grid: &MenuGrid) -> Result<BuiltDeck> {
    let mut pres = MutablePresentation::new();
    pres.set_title(DECK_TITLE);

    // Cover
    let cover = pres.add_slide(SlideLayout::Title);
    add_title(cover, DECK_TITLE);
    add_text_box(cover, layout::cover_text(), COVER_TEXT, None)?;
    let cover = cover.slide_ref();
    debug!("Created cover slide {}", cover.number());

    // Menu, with one unwired button per dance
    let menu = pres.add_slide(SlideLayout::TitleAndContent);
    add_title(menu, MENU_TITLE);
    let mut pending = Vec::with_capacity(catalog.len());
    for (i, dance) in catalog.dances().iter().enumerate() {
        let menu_button = make_button(menu, grid.cell(i), &dance.name, ButtonStyle::DEFAULT)?;
        pending.push(PendingDance { dance, menu_button });
    }
    let menu = menu.slide_ref();
    debug!("Created menu slide {} with {} buttons", menu.number(), pending.len());

    let mut dances = Vec::with_capacity(pending.len());
    for PendingDance { dance, menu_button } in pending {
        dances.push(add_dance_slides(&mut pres, menu, dance, menu_button)?);
    }

    // Second pass: menu buttons now have targets
    for slides in &dances {
        pres.set_click_action(slides.menu_button, ClickAction::slide(slides.history))?;
        debug!(
            "Menu button '{}' -> slide {}",
            slides.name,
            slides.history.number()
        );
    }

    Ok(BuiltDeck {
        presentation: pres,
        cover,
        menu,
        dances,
    })
}

fn add_dance_slides(
    pres: &mut MutablePresentation,
    menu: SlideRef,
    dance: &Dance,
    menu_button: ShapeRef,
) -> Result<DanceSlides> {
    let name = dance.name.as_str();

    let history = pres.add_slide(SlideLayout::TitleAndContent);
    add_title(history, &history_title(name));
    add_text_box(history, layout::content_body(), &dance.history, None)?;
    let history_home = make_button(history, layout::home_button(), HOME_LABEL, ButtonStyle::HOME)?;

    let clothing = pres.add_slide(SlideLayout::TitleAndContent);
    add_title(clothing, &clothing_title(name));
    add_text_box(clothing, layout::content_body(), &dance.clothing, None)?;
    let clothing_home = make_button(clothing, layout::home_button(), HOME_LABEL, ButtonStyle::HOME)?;

    let video = pres.add_slide(SlideLayout::TitleAndContent);
    add_title(video, &video_title(name));
    add_text_box(video, layout::video_instructions(), VIDEO_INSTRUCTIONS, None)?;
    let video_button = make_button(video, layout::video_button(), VIDEO_LABEL, ButtonStyle::VIDEO)?;
    let video_home = make_button(video, layout::home_button(), HOME_LABEL, ButtonStyle::HOME)?;

    let home_buttons = [history_home, clothing_home, video_home];
    for button in home_buttons {
        pres.set_click_action(button, ClickAction::slide(menu))?;
    }

    if dance.has_video() {
        pres.set_click_action(video_button, ClickAction::url(dance.video_url.as_str()))?;
        debug!("Video button for '{}' -> {}", name, dance.video_url);
    } else {
        warn!("No video URL for '{}'; video button left without a link", name);
    }

    let slides = DanceSlides {
        name: dance.name.clone(),
        menu_button,
        history: history_home.slide,
        clothing: clothing_home.slide,
        video: video_home.slide,
        video_button,
        home_buttons,
    };
    debug!(
        "Created slides {}-{} for '{}'",
        slides.history.number(),
        slides.video.number(),
        name
    );
    Ok(slides)
}

/// Build the deck described by `config` and write it to `config.output`.
pub fn generate(config: &GeneratorConfig) -> Result<BuiltDeck> {
    let deck = build_deck(&config.catalog, &config.menu_grid)?;
    deck.save(&config.output)?;
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use crate::museum::content::DANCES;
    use crate::ooxml::pptx::{LinkOutline, PresentationOutline};

    fn builtin_outline() -> PresentationOutline {
        let deck = build_deck(&DanceCatalog::builtin(), &MenuGrid::default()).unwrap();
        PresentationOutline::from_bytes(&deck.to_bytes().unwrap()).unwrap()
    }

    #[test]
    fn test_builtin_slide_order() {
        let outline = builtin_outline();
        assert_eq!(outline.slide_count(), 23);
        assert_eq!(outline.slides[0].title.as_deref(), Some(DECK_TITLE));
        assert_eq!(outline.slides[0].text_boxes, vec![COVER_TEXT]);
        assert_eq!(outline.slides[1].title.as_deref(), Some(MENU_TITLE));

        for (k, name) in DANCES.iter().enumerate() {
            let base = 2 + 3 * k;
            assert_eq!(outline.slides[base].title, Some(history_title(name)));
            assert_eq!(outline.slides[base + 1].title, Some(clothing_title(name)));
            assert_eq!(outline.slides[base + 2].title, Some(video_title(name)));
        }
    }

    #[test]
    fn test_huayno_history_slide() {
        let outline = builtin_outline();
        let slide = &outline.slides[2];
        assert_eq!(slide.title.as_deref(), Some("Huayno — Historia"));
        assert_eq!(
            slide.text_boxes,
            vec![crate::museum::content::history_text("Huayno")]
        );
    }

    #[test]
    fn test_menu_buttons_target_history_slides() {
        let outline = builtin_outline();
        let menu = &outline.slides[1];
        assert_eq!(menu.buttons.len(), 7);

        for (k, (button, name)) in menu.buttons.iter().zip(DANCES).enumerate() {
            assert_eq!(button.label, name);
            assert_eq!(button.fill, Some(RGBColor::new(0, 112, 192)));
            assert_eq!(button.click, Some(LinkOutline::Slide(2 + 3 * k)));
        }
    }

    #[test]
    fn test_home_buttons_target_menu() {
        let outline = builtin_outline();
        let homes: Vec<_> = outline.slides[2..]
            .iter()
            .flat_map(|s| s.buttons_labelled(HOME_LABEL))
            .collect();
        assert_eq!(homes.len(), 21);
        assert!(homes.iter().all(|b| b.click == Some(LinkOutline::Slide(1))));
        assert!(homes.iter().all(|b| b.fill == Some(RGBColor::new(80, 80, 80))));
    }

    #[test]
    fn test_video_links() {
        let outline = builtin_outline();
        for (k, name) in DANCES.iter().enumerate() {
            let slide = &outline.slides[4 + 3 * k];
            assert_eq!(slide.text_boxes, vec![VIDEO_INSTRUCTIONS]);
            let video: Vec<_> = slide.buttons_labelled(VIDEO_LABEL).collect();
            assert_eq!(video.len(), 1);
            assert_eq!(
                video[0].click,
                Some(LinkOutline::External(
                    crate::museum::content::video_link(name).to_string()
                ))
            );
        }
    }

    #[test]
    fn test_empty_video_url_leaves_button_unlinked() {
        let catalog = DanceCatalog::new(vec![Dance {
            name: "Saya".to_string(),
            history: String::new(),
            clothing: String::new(),
            video_url: String::new(),
        }])
        .unwrap();
        let deck = build_deck(&catalog, &MenuGrid::default()).unwrap();
        assert_eq!(deck.slide_count(), 5);

        let outline = PresentationOutline::from_bytes(&deck.to_bytes().unwrap()).unwrap();
        let video = &outline.slides[4];
        assert_eq!(video.title.as_deref(), Some("Saya — Video"));
        let button = video.buttons_labelled(VIDEO_LABEL).next().unwrap();
        assert_eq!(button.click, None);

        // Empty bodies still produce their text boxes
        assert_eq!(outline.slides[2].text_boxes, vec![""]);
    }

    #[test]
    fn test_handles_match_deck() {
        let deck = build_deck(&DanceCatalog::builtin(), &MenuGrid::default()).unwrap();
        assert_eq!(deck.cover, SlideRef::new(0));
        assert_eq!(deck.menu, SlideRef::new(1));
        let saya = &deck.dances[5];
        assert_eq!(saya.name, "Saya");
        assert_eq!(saya.history, SlideRef::new(17));
        assert_eq!(saya.video, SlideRef::new(19));
        assert_eq!(saya.menu_button.slide, deck.menu);
        assert_eq!(
            deck.presentation
                .shape(saya.menu_button)
                .unwrap()
                .click_action(),
            Some(&ClickAction::Slide(saya.history))
        );
    }

    #[test]
    fn test_menu_buttons_follow_grid() {
        let grid = MenuGrid::default();
        let deck = build_deck(&DanceCatalog::builtin(), &grid).unwrap();
        assert_eq!(deck.dances.len(), 7);

        for (k, dance) in deck.dances.iter().enumerate() {
            let shape = deck.presentation.shape(dance.menu_button).unwrap();
            assert_eq!(shape.rect(), grid.cell(k), "button {}", k);
            assert_eq!(grid.position(k), (k / 2, k % 2));
        }
    }

    #[test]
    fn test_generate_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::new().with_output(dir.path().join("museo.pptx"));

        generate(&config).unwrap();
        let first = std::fs::read(&config.output).unwrap();
        generate(&config).unwrap();
        let second = std::fs::read(&config.output).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            PresentationOutline::from_bytes(&first).unwrap(),
            PresentationOutline::open(&config.output).unwrap()
        );
    }
}
