use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/**
The context-similarity capability: a function scoring the similarity of two
sparse weight maps. Implementations must be symmetric and non-negative.

Shared behind an `Arc` so the same function can score contexts across
threads.
*/
pub type ContextSimilarity<T> =
    Arc<dyn Fn(&HashMap<T, f64>, &HashMap<T, f64>) -> f64 + Send + Sync>;

/**
Computes the cosine similarity of two sparse weight maps treated as vectors:
`Σ a[k]·b[k] / (‖a‖·‖b‖)`. Returns `0.0` when either norm is zero.

# Examples

```
use std::collections::HashMap;
use watset::cosine_similarity;

let a: HashMap<&str, f64> = vec![("x", 1.0), ("y", 1.0)].into_iter().collect();
let b: HashMap<&str, f64> = vec![("y", 1.0), ("z", 1.0)].into_iter().collect();
let similarity = cosine_similarity(&a, &b);
assert!((similarity - 0.5).abs() < 1e-12);
```
*/
pub fn cosine_similarity<T>(a: &HashMap<T, f64>, b: &HashMap<T, f64>) -> f64
where
    T: Eq + Hash,
{
    let norm_a = norm(a);
    let norm_b = norm(b);
    match norm_a == 0.0 || norm_b == 0.0 {
        true => 0.0,
        false => dot(a, b) / (norm_a * norm_b),
    }
}

/// The dot product of two sparse weight maps.
fn dot<T>(a: &HashMap<T, f64>, b: &HashMap<T, f64>) -> f64
where
    T: Eq + Hash,
{
    a.iter()
        .map(|(key, weight)| weight * b.get(key).unwrap_or(&0.0))
        .sum()
}

/// The Euclidean norm of a sparse weight map.
fn norm<T>(a: &HashMap<T, f64>) -> f64 {
    a.values().map(|weight| weight * weight).sum::<f64>().sqrt()
}

#[cfg(test)]
mod tests {

    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn context(pairs: Vec<(&'static str, f64)>) -> HashMap<&'static str, f64> {
        pairs.into_iter().collect()
    }

    #[test]
    fn test_cosine_identical() {
        let a = context(vec![("x", 2.0), ("y", 3.0)]);
        assert_approx_eq!(cosine_similarity(&a, &a), 1.0);
    }

    #[test]
    fn test_cosine_disjoint() {
        let a = context(vec![("x", 1.0)]);
        let b = context(vec![("y", 1.0)]);
        assert_approx_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_partial_overlap() {
        let a = context(vec![("x", 1.0), ("y", 1.0)]);
        let b = context(vec![("y", 1.0), ("z", 1.0)]);
        assert_approx_eq!(cosine_similarity(&a, &b), 0.5);
    }

    #[test]
    fn test_cosine_empty_is_zero() {
        let a = context(vec![]);
        let b = context(vec![("x", 1.0)]);
        assert_approx_eq!(cosine_similarity(&a, &b), 0.0);
        assert_approx_eq!(cosine_similarity(&a, &a), 0.0);
    }

    #[test]
    fn test_cosine_symmetric() {
        let a = context(vec![("x", 1.0), ("y", 2.0)]);
        let b = context(vec![("y", 3.0), ("z", 4.0)]);
        assert_approx_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }
}
