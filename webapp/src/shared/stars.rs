use rand::random;

// one twinkling dot in the hero background
//
// positions are percentages of the hero, size is in pixels, period is in seconds
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub top: f64,
    pub left: f64,
    pub size: f64,
    pub period: f64,
}

impl Star {
    fn random() -> Star {
        Star {
            top: random::<f64>() * 100.0,
            left: random::<f64>() * 100.0,
            size: random::<f64>() * 3.0,
            period: random::<f64>() * 3.0 + 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "top: {:.2}%; left: {:.2}%; width: {:.2}px; height: {:.2}px; animation: twinkle {:.2}s infinite;",
            self.top, self.left, self.size, self.size, self.period
        )
    }
}

pub fn starfield(count: usize) -> Vec<Star> {
    (0..count).map(|_| Star::random()).collect()
}
