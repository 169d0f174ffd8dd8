//! A failing slot must never be treated as having produced a value. The
//! aggregate is returned early here while a sibling still holds a nested
//! aggregate, and both are then dropped.

use futures_aggregate::prelude::*;
use std::{
    future::{ready, Future},
    pin::Pin,
};
use tokio::time::{sleep, Duration};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

async fn process_not_fail() -> Result<Vec<i32>, ()> {
    sleep(Duration::from_millis(100)).await;
    vec![ready(Ok(1)), ready(Ok(2))].aggregate().await
}

async fn process_fail() -> Result<Vec<i32>, ()> {
    Err(())
}

#[tokio::test]
async fn array() {
    let a: BoxFuture<'static, _> = Box::pin(process_fail());
    let b: BoxFuture<'static, _> = Box::pin(process_not_fail());
    let res = [a, b].aggregate().await;
    assert!(res.is_err());
}

#[tokio::test]
async fn vec() {
    let a: BoxFuture<'static, _> = Box::pin(process_fail());
    let b: BoxFuture<'static, _> = Box::pin(process_not_fail());
    let res = vec![a, b].aggregate().await;
    assert!(res.is_err());
}

#[tokio::test]
async fn sparse() {
    let a: BoxFuture<'static, _> = Box::pin(process_not_fail());
    let b: BoxFuture<'static, _> = Box::pin(process_fail());
    let res = vec![Some(a), None, Some(b)].aggregate_sparse().await;
    assert!(res.is_err());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn wakes_from_other_threads() {
    let handles: Vec<_> = (0..8u64)
        .map(|n| {
            tokio::spawn(async move {
                sleep(Duration::from_millis(40 - n * 5)).await;
                n
            })
        })
        .collect();
    let values = handles.aggregate().await.unwrap();
    assert_eq!(values, (0..8).collect::<Vec<_>>());
}
