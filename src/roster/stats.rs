use serde::Serialize;

/// Average, highest and lowest of a set of scores. Each value is `None`
/// when the set is empty.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Statistics {
    pub average: Option<f64>,
    pub highest: Option<f64>,
    pub lowest: Option<f64>,
}

impl Statistics {
    pub fn from_scores<I>(scores: I) -> Self
    where
        I: IntoIterator<Item = f64> + Clone,
    {
        Self {
            average: average(scores.clone()),
            highest: highest(scores.clone()),
            lowest: lowest(scores),
        }
    }
}

pub fn average<I: IntoIterator<Item = f64>>(scores: I) -> Option<f64> {
    let (sum, count) = scores
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), score| (sum + score, count + 1));
    if count == 0 {
        return None;
    }
    Some(sum / count as f64)
}

pub fn highest<I: IntoIterator<Item = f64>>(scores: I) -> Option<f64> {
    scores
        .into_iter()
        .fold(None, |acc: Option<f64>, score| Some(acc.map_or(score, |m| m.max(score))))
}

pub fn lowest<I: IntoIterator<Item = f64>>(scores: I) -> Option<f64> {
    scores
        .into_iter()
        .fold(None, |acc: Option<f64>, score| Some(acc.map_or(score, |m| m.min(score))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_scores_are_undefined() {
        let empty: Vec<f64> = vec![];
        assert_eq!(average(empty.iter().copied()), None);
        assert_eq!(highest(empty.iter().copied()), None);
        assert_eq!(lowest(empty.iter().copied()), None);
        assert_eq!(Statistics::from_scores(empty.iter().copied()), Statistics::default());
    }

    #[test]
    fn reductions() {
        let scores = [90.0, 80.0, 70.0, 80.0];
        let stats = Statistics::from_scores(scores.iter().copied());
        assert_eq!(stats.average, Some(80.0));
        assert_eq!(stats.highest, Some(90.0));
        assert_eq!(stats.lowest, Some(70.0));
    }

    #[test]
    fn single_score() {
        assert_eq!(average([42.5]), Some(42.5));
        assert_eq!(highest([42.5]), Some(42.5));
        assert_eq!(lowest([42.5]), Some(42.5));
    }
}
