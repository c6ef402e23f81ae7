//! Navigation checks on a written deck.
//!
//! Works on the [`PresentationOutline`] read back from the file, so it checks
//! what a viewer would actually see rather than the in-memory model.

use super::assembler::{
    HOME_LABEL, MENU_TITLE, VIDEO_LABEL, clothing_title, history_title, video_title,
};
use super::content::DanceCatalog;
use super::error::{MuseumError, Result};
use crate::ooxml::pptx::writer::slide::single_line;
use crate::ooxml::pptx::{LinkOutline, PresentationOutline};
use std::collections::HashSet;

const MENU_INDEX: usize = 1;
const FIRST_CONTENT_INDEX: usize = 2;

/// Collect every navigation rule the outline breaks.
pub fn find_violations(outline: &PresentationOutline, catalog: &DanceCatalog) -> Vec<String> {
    let mut violations = Vec::new();

    let expected = FIRST_CONTENT_INDEX + 3 * catalog.len();
    if outline.slide_count() != expected {
        violations.push(format!(
            "expected {} slides, found {}",
            expected,
            outline.slide_count()
        ));
    }

    let Some(menu) = outline.slides.get(MENU_INDEX) else {
        violations.push("menu slide is missing".to_string());
        return violations;
    };
    if menu.title.as_deref() != Some(MENU_TITLE) {
        violations.push(format!("slide 2 is not the menu: {:?}", menu.title));
    }
    if menu.buttons.len() != catalog.len() {
        violations.push(format!(
            "menu has {} buttons, expected {}",
            menu.buttons.len(),
            catalog.len()
        ));
    }
    let labels: HashSet<_> = menu.buttons.iter().map(|b| b.label.as_str()).collect();
    if labels.len() != menu.buttons.len() {
        violations.push("menu button labels are not distinct".to_string());
    }

    for (k, dance) in catalog.dances().iter().enumerate() {
        let history = FIRST_CONTENT_INDEX + 3 * k;
        let name = dance.name.as_str();

        match menu.buttons_labelled(name).next() {
            Some(button) if button.click == Some(LinkOutline::Slide(history)) => {},
            Some(button) => violations.push(format!(
                "menu button '{}' targets {:?}, expected slide {}",
                name,
                button.click,
                history + 1
            )),
            None => violations.push(format!("menu has no button for '{}'", name)),
        }

        let titles = [history_title(name), clothing_title(name), video_title(name)]
            .map(|title| single_line(&title));
        for (offset, title) in titles.iter().enumerate() {
            let index = history + offset;
            let Some(slide) = outline.slides.get(index) else {
                continue;
            };
            if slide.title.as_deref() != Some(title.as_str()) {
                violations.push(format!(
                    "slide {} should be '{}', found {:?}",
                    index + 1,
                    title,
                    slide.title
                ));
            }

            let homes: Vec<_> = slide.buttons_labelled(HOME_LABEL).collect();
            let home_ok = homes.len() == 1
                && homes[0].click == Some(LinkOutline::Slide(MENU_INDEX));
            if !home_ok {
                violations.push(format!(
                    "slide {} must have exactly one home button back to the menu",
                    index + 1
                ));
            }
        }

        if let Some(video) = outline.slides.get(history + 2) {
            let expected = dance
                .has_video()
                .then(|| LinkOutline::External(dance.video_url.clone()));
            match video.buttons_labelled(VIDEO_LABEL).next() {
                Some(button) if button.click == expected => {},
                Some(button) => violations.push(format!(
                    "video button for '{}' links {:?}, expected {:?}",
                    name, button.click, expected
                )),
                None => violations.push(format!("video slide for '{}' has no video button", name)),
            }
        }
    }

    violations
}

/// Fail with every violation if the outline breaks a navigation rule.
pub fn check_navigation(outline: &PresentationOutline, catalog: &DanceCatalog) -> Result<()> {
    let violations = find_violations(outline, catalog);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(MuseumError::Navigation(violations))
    }
}
