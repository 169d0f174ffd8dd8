//! Aggregate a slow future, a ready future, and a plain value; then do the
//! same with a failing future in place of the plain value.

use async_io::Timer;
use futures_aggregate::future::Eventual;
use futures_aggregate::prelude::*;
use futures_lite::future::block_on;

use std::future::{ready, Future};
use std::pin::Pin;
use std::time::Duration;

type BoxFuture = Pin<Box<dyn Future<Output = Result<Value, &'static str>>>>;

#[derive(Debug)]
#[allow(dead_code)]
enum Value {
    Text(&'static str),
    Number(u32),
}

fn timeout() -> BoxFuture {
    Box::pin(async {
        Timer::after(Duration::from_millis(500)).await;
        Ok(Value::Text("timeout"))
    })
}

fn resolved() -> BoxFuture {
    Box::pin(ready(Ok(Value::Number(42))))
}

fn rejected() -> BoxFuture {
    Box::pin(ready(Err("error")))
}

fn main() {
    block_on(async {
        let inputs = vec![
            Eventual::Future(timeout()),
            Eventual::Future(resolved()),
            Eventual::Value(Value::Number(128)),
        ];
        match inputs.aggregate().await {
            Ok(values) => println!("{values:?}"),
            Err(reason) => eprintln!("{reason}"),
        }

        let inputs = vec![timeout(), resolved(), rejected()];
        match inputs.aggregate().await {
            Ok(values) => println!("{values:?}"),
            Err(reason) => eprintln!("{reason}"),
        }
    })
}
