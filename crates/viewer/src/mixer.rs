use scene::model::AnimationClipData;

/// Looping playback of a single animation clip, advanced by wall-clock
/// deltas.
#[derive(Debug)]
pub struct AnimationMixer {
    clip_name: String,
    duration_s: f64,
    time_s: f64,
}

impl AnimationMixer {
    pub fn new(clip: &AnimationClipData) -> Self {
        Self {
            clip_name: clip.name.clone(),
            duration_s: clip.duration_s,
            time_s: 0.0,
        }
    }

    pub fn clip_name(&self) -> &str {
        &self.clip_name
    }

    pub fn time_s(&self) -> f64 {
        self.time_s
    }

    pub fn advance(&mut self, dt: f64) {
        if self.duration_s <= 0.0 {
            return;
        }
        self.time_s = (self.time_s + dt) % self.duration_s;
    }
}

#[cfg(test)]
mod tests {
    use super::AnimationMixer;
    use scene::model::AnimationClipData;

    fn clip(duration_s: f64) -> AnimationClipData {
        AnimationClipData {
            name: "sway".into(),
            duration_s,
        }
    }

    #[test]
    fn advances_and_loops() {
        let mut mixer = AnimationMixer::new(&clip(2.0));
        mixer.advance(1.5);
        assert_eq!(mixer.time_s(), 1.5);
        mixer.advance(1.0);
        assert!((mixer.time_s() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn starts_at_clip_origin() {
        let mixer = AnimationMixer::new(&clip(2.0));
        assert_eq!(mixer.time_s(), 0.0);
        assert_eq!(mixer.clip_name(), "sway");
    }
}
