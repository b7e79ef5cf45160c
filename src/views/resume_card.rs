// ============================================================================
// RESUME CARD VIEW - Un CV del catálogo
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::models::ResumeSummary;
use crate::router::Navigator;

/// Renderizar resume card (clave de render: `data-key` = id)
pub fn render_resume_card(resume: &ResumeSummary, navigator: Rc<dyn Navigator>) -> Result<Element, JsValue> {
    let job = match &resume.job_title {
        Some(job_title) => Some(ElementBuilder::new("h3")?
            .class("text-lg break-words text-gray-500")
            .text(job_title)
            .build()),
        None => None,
    };

    // Header: empresa + puesto a la izquierda, puntuación a la derecha
    let titles = ElementBuilder::new("div")?
        .class("flex flex-col gap-2")
        .child(
            ElementBuilder::new("h2")?
                .class("text-black font-bold break-words")
                .text(resume.display_title())
                .build(),
        )?
        .child_opt(job)?
        .build();

    let score = resume.feedback.overall_score;
    let badge = ElementBuilder::new("div")?
        .class(resume.score_tone().class())
        .attr("aria-label", &format!("Overall score {} of 100", score))?
        .text(&format!("{}/100", score))
        .build();

    let header = ElementBuilder::new("div")?
        .class("resume-card-header")
        .children([titles, badge])?
        .build();

    let image = ElementBuilder::new("img")?
        .class("w-full h-[350px] max-sm:h-[200px] object-cover object-top")
        .attr("src", &resume.image_path)?
        .attr("alt", "resume")?
        .build();

    let preview = ElementBuilder::new("div")?
        .class("gradient-border animate-in fade-in duration-1000")
        .child(image)?
        .build();

    Ok(ElementBuilder::new("a")?
        .class("resume-card animate-in fade-in duration-1000")
        .link(&resume.detail_path(), navigator)?
        .key(&resume.id)?
        .children([header, preview])?
        .build())
}
