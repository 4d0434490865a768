//! # Menu
//!
//! Interactive text menu over a [`Store`]. Reads commands from any
//! `BufRead` and writes to any `Write`, so tests can drive it with buffers.

use std::io::{self, BufRead, Write};
use store_core::{ItemId, LineItem, Store};
use tracing::{debug, info};

/// Menu loop bound to one store
pub struct Menu<'a, R, W> {
    store: &'a mut Store,
    store_name: String,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(store: &'a mut Store, store_name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            store,
            store_name: store_name.into(),
            input,
            output,
        }
    }

    /// Run until the user quits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n==== Welcome to {} ====", self.store_name)?;
            writeln!(self.output, "1. List all products in store")?;
            writeln!(self.output, "2. Show total amount in store")?;
            writeln!(self.output, "3. Make an order")?;
            writeln!(self.output, "4. Quit")?;

            let Some(choice) = self.prompt("Please choose a number: ")? else {
                return Ok(());
            };

            match choice.as_str() {
                "1" => self.list_products()?,
                "2" => self.show_total()?,
                "3" => self.make_order()?,
                "4" => {
                    writeln!(self.output, "Thank you for shopping with us!")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    /// Print `text`, read one trimmed line; `None` at end of input
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn list_products(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Products in Store ---")?;
        write!(self.output, "{}", self.store)
    }

    fn show_total(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "\nTotal quantity in store: {}",
            self.store.total_stock()
        )
    }

    fn make_order(&mut self) -> io::Result<()> {
        let choices: Vec<(ItemId, String)> = self
            .store
            .active_items()
            .map(|p| (p.id(), p.name().to_string()))
            .collect();

        writeln!(self.output, "\n--- Make an Order ---")?;
        write!(self.output, "{}", self.store)?;

        let mut lines = Vec::new();
        loop {
            let selection = self.prompt("Enter product number to buy (or 'done' to finish): ")?;
            let Some(selection) = selection else {
                break;
            };
            if selection.eq_ignore_ascii_case("done") {
                break;
            }

            let Ok(number) = selection.parse::<usize>() else {
                writeln!(self.output, "Please enter valid numbers.")?;
                continue;
            };
            let Some((id, name)) = number.checked_sub(1).and_then(|i| choices.get(i)).cloned()
            else {
                writeln!(self.output, "Invalid product number.")?;
                continue;
            };

            let Some(quantity) = self.prompt(&format!("Enter quantity for {name}: "))? else {
                break;
            };
            match quantity.parse::<u32>() {
                Ok(quantity) => lines.push(LineItem::new(id, quantity)),
                Err(_) => writeln!(self.output, "Please enter valid numbers.")?,
            }
        }

        if lines.is_empty() {
            return writeln!(self.output, "No products selected.");
        }

        match self.store.place_order(&lines) {
            Ok(receipt) => {
                info!(receipt = %receipt.id, total = receipt.total, "order placed");
                if let Ok(json) = serde_json::to_string(&receipt) {
                    debug!(receipt = %json, "receipt");
                }
                writeln!(
                    self.output,
                    "\nOrder placed! Total cost: ${:.2}",
                    receipt.total
                )
            }
            Err(e) => {
                debug!(error = %e, recoverable = e.is_recoverable(), "order rejected");
                writeln!(self.output, "Order failed: {e}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::demo_store;
    use std::io::Cursor;

    fn run_session(store: &mut Store, input: &str) -> String {
        let mut output = Vec::new();
        Menu::new(store, "Best Buy", Cursor::new(input.to_string()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_quit() {
        let mut store = demo_store().unwrap();
        let output = run_session(&mut store, "4\n");
        assert!(output.contains("==== Welcome to Best Buy ===="));
        assert!(output.contains("Thank you for shopping with us!"));
    }

    #[test]
    fn test_list_products_and_total() {
        let mut store = demo_store().unwrap();
        let output = run_session(&mut store, "1\n2\n4\n");
        assert!(output.contains("1. MacBook Air M2, Price: 1450, Quantity: 100"));
        assert!(output.contains("3. Google Pixel 7, Price: 500, Quantity: 250"));
        assert!(output.contains("Total quantity in store: 850"));
    }

    #[test]
    fn test_make_order() {
        let mut store = demo_store().unwrap();
        let output = run_session(&mut store, "3\n1\n1\n2\n2\ndone\n4\n");
        assert!(output.contains("Order placed! Total cost: $1950.00"));
        assert_eq!(store.total_stock(), 850 - 3);
    }

    #[test]
    fn test_order_failure_is_reported() {
        let mut store = demo_store().unwrap();
        let output = run_session(&mut store, "3\n1\n101\ndone\n4\n");
        assert!(output.contains("Order failed: Not enough stock available for MacBook Air M2"));
        assert_eq!(store.total_stock(), 850);
    }

    #[test]
    fn test_invalid_input() {
        let mut store = demo_store().unwrap();
        let output = run_session(&mut store, "9\n3\nabc\n7\n1\n-2\ndone\n4\n");
        assert!(output.contains("Invalid choice. Please try again."));
        assert!(output.contains("Please enter valid numbers."));
        assert!(output.contains("Invalid product number."));
        assert!(output.contains("No products selected."));
        assert_eq!(store.total_stock(), 850);
    }

    #[test]
    fn test_end_of_input_stops() {
        let mut store = demo_store().unwrap();
        let output = run_session(&mut store, "3\n1\n");
        assert!(output.contains("Enter quantity for MacBook Air M2: "));
        assert_eq!(store.total_stock(), 850);
    }
}
