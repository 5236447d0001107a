use std::io::Write;

use log::{info, warn};

use crate::config::DemoConfig;
use crate::data_structure::link_list::{InsertOrder, LinkList};
use crate::data_structure::random::seeded_rng;

type Result<T> = anyhow::Result<T>;

/// Replays the demonstration scenario, writing every step to `out`.
///
/// Failed list operations are reported on `out` and the run goes on; only
/// write errors end it early.
pub fn run<W: Write>(out: &mut W, config: &DemoConfig) -> Result<()> {
    let mut list: LinkList<i32> = LinkList::new();
    writeln!(out, "after init: length = {}", list.len())?;

    for j in 1..=5 {
        insert_or_report(out, &mut list, 1, j)?;
    }
    writeln!(out, "inserted 1..=5 at the head: {}", list)?;
    writeln!(out, "length = {}", list.len())?;
    writeln!(out, "is empty: {}", list.is_empty())?;

    list.clear();
    writeln!(out, "after clear: length = {}", list.len())?;
    writeln!(out, "is empty: {}", list.is_empty())?;

    for j in 1..=10 {
        insert_or_report(out, &mut list, j, j as i32)?;
    }
    writeln!(out, "inserted 1..=10 at the tail: {}", list)?;
    writeln!(out, "length = {}", list.len())?;

    insert_or_report(out, &mut list, 1, 0)?;
    writeln!(out, "inserted 0 at the head: {}", list)?;
    writeln!(out, "length = {}", list.len())?;

    match list.get(5) {
        Ok(e) => writeln!(out, "element 5 is {}", e)?,
        Err(err) => report(out, "reading element 5", &err)?,
    }

    for j in 3..=4 {
        match list.locate(&j) {
            Some(k) => writeln!(out, "value {} is element {}", j, k)?,
            None => writeln!(out, "no element with value {}", j)?,
        }
    }

    let k = list.len();
    for j in (k..=k + 1).rev() {
        delete_or_report(out, &mut list, j)?;
    }
    writeln!(out, "elements: {}", list)?;

    delete_or_report(out, &mut list, 5)?;
    writeln!(out, "elements: {}", list)?;

    let seed = config.resolve_seed();
    info!("bulk construction seed is {}", seed);
    for (label, order) in [("head", InsertOrder::Head), ("tail", InsertOrder::Tail)] {
        list.clear();
        writeln!(out)?;
        writeln!(out, "after clear: length = {}", list.len())?;
        // Same seed for both orders, so the tail build mirrors the head build.
        match LinkList::<i32>::random(config.count, order, &mut seeded_rng(seed)) {
            Ok(built) => {
                list = built;
                writeln!(out, "built by {} insertion: {}", label, list)?;
            }
            Err(err) => report(out, &format!("building by {} insertion", label), &err)?,
        }
    }

    Ok(())
}

fn insert_or_report<W: Write>(
    out: &mut W,
    list: &mut LinkList<i32>,
    position: usize,
    e: i32,
) -> Result<()> {
    if let Err(err) = list.insert(position, e) {
        report(out, &format!("inserting {} at element {}", e, position), &err)?;
    }
    Ok(())
}

fn delete_or_report<W: Write>(
    out: &mut W,
    list: &mut LinkList<i32>,
    position: usize,
) -> Result<()> {
    match list.delete(position) {
        Ok(e) => writeln!(out, "deleted element {}: {}", position, e)?,
        Err(err) => report(out, &format!("deleting element {}", position), &err)?,
    }
    Ok(())
}

fn report<W: Write>(out: &mut W, what: &str, err: &dyn std::error::Error) -> Result<()> {
    warn!("{} failed: {}", what, err);
    writeln!(out, "{} failed: {}", what, err)?;
    Ok(())
}
