//! Tests for cosine similarity and top-k retrieval.

use skimmer_memory::{Retriever, cosine_similarity};

#[test]
fn cosine_self_similarity_is_one() {
    let v = vec![0.3, 0.7, 0.1, 0.9];
    assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
}

#[test]
fn cosine_orthogonal_is_zero() {
    let a = [1.0, 0.0];
    let b = [0.0, 1.0];
    assert!(cosine_similarity(&a, &b).abs() < 1e-6);
}

#[test]
fn cosine_zero_vector_is_zero_not_nan() {
    let a = [0.0, 0.0, 0.0];
    let b = [1.0, 2.0, 3.0];
    let score = cosine_similarity(&a, &b);
    assert_eq!(score, 0.0);
    assert!(!score.is_nan());
    assert_eq!(cosine_similarity(&a, &a), 0.0);
}

#[test]
fn cosine_length_mismatch_is_zero() {
    assert_eq!(cosine_similarity(&[1.0], &[1.0, 2.0]), 0.0);
    assert_eq!(cosine_similarity(&[], &[]), 0.0);
}

#[test]
fn uninitialized_retriever_rejects_operations() {
    let mut retriever = Retriever::new();
    assert!(retriever.add_document("doc", vec![1.0]).is_err());
    assert!(retriever.find_relevant_context(&[1.0], 3).is_err());

    retriever.ensure_initialized();
    retriever.ensure_initialized(); // idempotent
    assert!(retriever.add_document("doc", vec![1.0]).is_ok());
}

#[test]
fn empty_store_yields_empty_context() {
    let mut retriever = Retriever::new();
    retriever.ensure_initialized();
    let context = retriever.find_relevant_context(&[1.0, 0.0], 3).unwrap();
    assert!(context.is_empty());
}

#[test]
fn top_k_ranks_by_descending_similarity() {
    let mut retriever = Retriever::new();
    retriever.ensure_initialized();
    retriever.add_document("east", vec![1.0, 0.0]).unwrap();
    retriever.add_document("north", vec![0.0, 1.0]).unwrap();
    retriever.add_document("northeast", vec![1.0, 1.0]).unwrap();

    let context = retriever.find_relevant_context(&[1.0, 0.1], 2).unwrap();
    assert_eq!(context, vec!["east".to_string(), "northeast".to_string()]);
}

#[test]
fn equal_scores_preserve_insertion_order() {
    let mut retriever = Retriever::new();
    retriever.ensure_initialized();
    // Identical embeddings score identically against any query.
    retriever.add_document("first", vec![1.0, 1.0]).unwrap();
    retriever.add_document("second", vec![1.0, 1.0]).unwrap();
    retriever.add_document("third", vec![1.0, 1.0]).unwrap();

    let context = retriever.find_relevant_context(&[1.0, 1.0], 3).unwrap();
    assert_eq!(
        context,
        vec!["first".to_string(), "second".to_string(), "third".to_string()]
    );
}

#[test]
fn k_larger_than_store_returns_all() {
    let mut retriever = Retriever::new();
    retriever.ensure_initialized();
    retriever.add_document("only", vec![1.0]).unwrap();
    let context = retriever.find_relevant_context(&[1.0], 5).unwrap();
    assert_eq!(context.len(), 1);
}
