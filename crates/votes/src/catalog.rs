use crate::session::Candidate;

/// The five designs up for vote. All candidates currently share one model
/// asset until per-design assets are exported.
pub fn default_candidates() -> Vec<Candidate> {
    (1..=5)
        .map(|id| Candidate::new(id, format!("Pillow {id}"), "/BodyPillow.glb"))
        .collect()
}
