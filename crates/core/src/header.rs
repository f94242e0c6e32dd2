/// Maps a vertical scroll offset onto a header size, clamped at both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderScale {
    pub input: (f32, f32),
    pub output: (f32, f32),
}

impl HeaderScale {
    pub const fn new(input: (f32, f32), output: (f32, f32)) -> Self {
        Self { input, output }
    }

    pub fn max_size(&self) -> f32 {
        self.output.0.max(self.output.1)
    }

    pub fn min_size(&self) -> f32 {
        self.output.0.min(self.output.1)
    }

    pub fn size_for(&self, offset: f32) -> f32 {
        let (in_start, in_end) = self.input;
        let (out_start, out_end) = self.output;
        let span = in_end - in_start;
        if span == 0.0 || !offset.is_finite() {
            return out_start;
        }

        let t = ((offset - in_start) / span).clamp(0.0, 1.0);
        out_start + (out_end - out_start) * t
    }
}

impl Default for HeaderScale {
    fn default() -> Self {
        Self::new((0.0, 100.0), (60.0, 30.0))
    }
}
