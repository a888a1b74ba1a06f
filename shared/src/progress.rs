/// Scroll geometry of the document, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// `window.scrollY`
    pub scroll_top: f64,
    /// `documentElement.scrollHeight`
    pub scroll_height: f64,
    /// `documentElement.clientHeight`
    pub client_height: f64,
    /// `window.innerHeight`
    pub inner_height: f64,
}

/// Percentage above which progress snaps to complete.
const SNAP_THRESHOLD: f64 = 98.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Progress {
    Top,
    Bottom,
    Partial(f64),
}

impl Progress {
    pub fn percent(&self) -> f64 {
        match self {
            Progress::Top => 0.0,
            Progress::Bottom => 100.0,
            Progress::Partial(percent) => *percent,
        }
    }

    /// Top and bottom are shown at once; intermediate values go through the throttle.
    pub fn is_edge(&self) -> bool {
        !matches!(self, Progress::Partial(_))
    }
}

pub fn reading_progress(metrics: &ScrollMetrics) -> Progress {
    if metrics.scroll_top <= 0.0 {
        return Progress::Top;
    }

    if metrics.inner_height + metrics.scroll_top >= metrics.scroll_height {
        return Progress::Bottom;
    }

    let scrollable = metrics.scroll_height - metrics.client_height;

    if scrollable <= 0.0 {
        return Progress::Partial(0.0);
    }

    let percent = metrics.scroll_top / scrollable * 100.0;

    if percent > SNAP_THRESHOLD {
        Progress::Partial(100.0)
    } else {
        Progress::Partial(percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_top: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top,
            scroll_height: 2000.0,
            client_height: 1000.0,
            inner_height: 1000.0,
        }
    }

    #[test]
    fn edges() {
        assert_eq!(reading_progress(&metrics(0.0)), Progress::Top);
        assert_eq!(reading_progress(&metrics(1000.0)), Progress::Bottom);
        assert!(reading_progress(&metrics(0.0)).is_edge());
    }

    #[test]
    fn midway() {
        assert_eq!(reading_progress(&metrics(250.0)).percent(), 25.0);
        assert!(!reading_progress(&metrics(250.0)).is_edge());
    }

    #[test]
    fn snaps_near_the_end() {
        assert_eq!(reading_progress(&metrics(985.0)), Progress::Partial(100.0));
    }

    #[test]
    fn unscrollable_page_reads_zero() {
        let metrics = ScrollMetrics {
            scroll_top: 10.0,
            scroll_height: 1000.0,
            client_height: 1200.0,
            inner_height: 500.0,
        };

        assert_eq!(reading_progress(&metrics).percent(), 0.0);
    }
}
