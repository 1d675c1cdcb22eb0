//! Text problem loader.
//!
//! # Format
//!
//! Whitespace-separated unsigned integers; line breaks carry no meaning.
//!
//! ```text
//! rows cols vehicles deadline capacity
//! P                       number of product types
//! w_0 … w_{P-1}           weight per product type
//! W                       number of depots
//! r c                     } once per depot
//! s_0 … s_{P-1}           }
//! C                       number of orders
//! r c                     } once per order
//! L                       }
//! p_1 … p_L               } one product id per requested item
//! ```
//!
//! Trailing tokens after the last order are rejected.

use std::io::Read;
use std::path::Path;
use std::str::{FromStr, SplitAsciiWhitespace};

use fd_core::{Catalog, DepotId, Location, OrderId, ProductId, RunConfig};

use crate::{Depot, FleetError, FleetResult, Order, Problem};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Problem`] from a file.
pub fn load_problem_file(path: &Path) -> FleetResult<Problem> {
    let file = std::fs::File::open(path).map_err(FleetError::Io)?;
    load_problem_reader(file)
}

/// Like [`load_problem_file`] but accepts any `Read` source.
pub fn load_problem_reader<R: Read>(mut reader: R) -> FleetResult<Problem> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    load_problem_str(&text)
}

/// Parse a [`Problem`] from its text encoding.
pub fn load_problem_str(text: &str) -> FleetResult<Problem> {
    let mut tokens = Tokens::new(text);

    // ── Header ────────────────────────────────────────────────────────────
    let config = RunConfig {
        rows:          tokens.next("grid rows")?,
        cols:          tokens.next("grid columns")?,
        vehicle_count: tokens.next("vehicle count")?,
        deadline:      tokens.next("deadline")?,
        capacity:      tokens.next("vehicle capacity")?,
    };

    // ── Catalog ───────────────────────────────────────────────────────────
    let product_count: usize = tokens.next("product type count")?;
    let weights = (0..product_count)
        .map(|_| tokens.next("product weight"))
        .collect::<FleetResult<Vec<u32>>>()?;
    let catalog = Catalog::new(weights)?;

    // ── Depots ────────────────────────────────────────────────────────────
    let depot_count: usize = tokens.next("depot count")?;
    let mut depots = Vec::with_capacity(depot_count);
    for i in 0..depot_count {
        let location = tokens.location("depot")?;
        let stock = (0..product_count)
            .map(|_| tokens.next("depot stock"))
            .collect::<FleetResult<Vec<u32>>>()?;
        depots.push(Depot::new(DepotId(i as u32), location, stock));
    }

    // ── Orders ────────────────────────────────────────────────────────────
    let order_count: usize = tokens.next("order count")?;
    let mut orders = Vec::with_capacity(order_count);
    for i in 0..order_count {
        let location = tokens.location("order")?;
        let item_count: usize = tokens.next("order item count")?;
        let items = (0..item_count)
            .map(|_| -> FleetResult<ProductId> {
                let product = ProductId(tokens.next("order item")?);
                catalog.check(product)?;
                Ok(product)
            })
            .collect::<FleetResult<Vec<ProductId>>>()?;
        orders.push(Order::from_items(OrderId(i as u32), location, &items));
    }

    tokens.finish()?;

    Ok(Problem { config, catalog, depots, orders })
}

// ── Tokenizer ─────────────────────────────────────────────────────────────────

struct Tokens<'a> {
    inner:    SplitAsciiWhitespace<'a>,
    consumed: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self { inner: text.split_ascii_whitespace(), consumed: 0 }
    }

    fn next<T: FromStr>(&mut self, what: &str) -> FleetResult<T> {
        let token = self.inner.next().ok_or_else(|| {
            FleetError::Parse(format!("expected {what} at token {}, found end of input", self.consumed))
        })?;
        self.consumed += 1;
        token.parse().map_err(|_| {
            FleetError::Parse(format!("expected {what} at token {}, found {token:?}", self.consumed - 1))
        })
    }

    fn location(&mut self, what: &str) -> FleetResult<Location> {
        let row = self.next(&format!("{what} row"))?;
        let col = self.next(&format!("{what} column"))?;
        Ok(Location::new(row, col))
    }

    fn finish(mut self) -> FleetResult<()> {
        match self.inner.next() {
            None        => Ok(()),
            Some(extra) => Err(FleetError::Parse(format!(
                "unexpected trailing token {extra:?} at token {}", self.consumed
            ))),
        }
    }
}
