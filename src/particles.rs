use crate::constants::*;
use crate::core::{generate, ParticleConfig};
use crate::dom;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use web_sys as web;

pub fn spawn_particles(document: &web::Document) -> anyhow::Result<usize> {
    let Some(container) = dom::query(document, SEL_PARTICLES) else {
        log::warn!("[particles] {} missing, skipping", SEL_PARTICLES);
        return Ok(0);
    };
    container.set_inner_html("");

    let mut rng = SmallRng::from_entropy();
    let particles = generate(&ParticleConfig::default(), &mut rng)?;
    for p in &particles {
        let el = document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("create particle: {:?}", e))?;
        _ = el.class_list().add_1(CLASS_PARTICLE);
        _ = el.set_attribute("style", &p.inline_style());
        container
            .append_child(&el)
            .map_err(|e| anyhow::anyhow!("append particle: {:?}", e))?;
    }
    Ok(particles.len())
}
