//! Plain-text rendering of the product table and the modal form.

use inventory_core::price::format_rupiah;
use inventory_core::Product;

use crate::state::ViewState;

pub const EMPTY_PLACEHOLDER: &str = "No products yet. Add a new one.";

const NO_HEADER: &str = "No";
const NAME_HEADER: &str = "Product Name";
const PRICE_HEADER: &str = "Price";

/// The whole screen: table, then the modal when one is open.
pub fn render_screen(products: &[Product], view: &ViewState) -> String {
    let mut screen = render_table(products);
    if let Some(modal) = render_modal(view) {
        screen.push('\n');
        screen.push_str(&modal);
    }
    screen
}

/// Product table with 1-based row numbers and rupiah prices.
pub fn render_table(products: &[Product]) -> String {
    let rows: Vec<[String; 3]> = products
        .iter()
        .enumerate()
        .map(|(i, p)| [(i + 1).to_string(), p.name.clone(), format_rupiah(p.price)])
        .collect();

    let mut widths = [NO_HEADER, NAME_HEADER, PRICE_HEADER].map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format_row(&[NO_HEADER, NAME_HEADER, PRICE_HEADER], &widths));
    out.push_str(&format!(
        "{}\n",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    ));

    if rows.is_empty() {
        out.push_str(&format!(" {EMPTY_PLACEHOLDER}\n"));
    }
    for row in &rows {
        let cells = [row[0].as_str(), row[1].as_str(), row[2].as_str()];
        out.push_str(&format_row(&cells, &widths));
    }
    out
}

fn format_row(cells: &[&str; 3], widths: &[usize; 3]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!(" {cell:<width$} "))
        .collect::<Vec<_>>()
        .join("|");
    format!("{}\n", line.trim_end())
}

/// Modal with its title, both inputs and the submit label.
pub fn render_modal(view: &ViewState) -> Option<String> {
    let form = view.form()?;
    let title = view.title()?;
    let submit = view.submit_label()?;

    Some(format!(
        "=== {title} ===\n\
         Name  : {}\n\
         Price : {}\n\
         [save] {submit}   [cancel] Cancel\n",
        form.name, form.price
    ))
}

pub const HELP: &str = "\
Commands:
  add              open the form for a new product
  edit <no>        edit the product in row <no>
  delete <no>      delete the product in row <no>
  name <text>      set the product name in the open form
  price <value>    set the price in the open form
  save             save the open form
  cancel           close the open form
  refresh          reload the product list
  help             show this help
  quit             exit
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ProductForm;
    use inventory_core::ProductId;

    fn product(id: i64, name: &str, price: f64) -> Product {
        Product {
            id: ProductId(id),
            name: name.to_string(),
            price,
        }
    }

    #[test]
    fn test_empty_table_shows_placeholder() {
        let table = render_table(&[]);
        assert!(table.contains(EMPTY_PLACEHOLDER));
        assert!(table.starts_with(" No | Product Name | Price"));
    }

    #[test]
    fn test_table_rows() {
        let table = render_table(&[
            product(7, "Kopi Susu", 15000.0),
            product(9, "Air Mineral", 4500.5),
        ]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with(" 1  | Kopi Susu"));
        assert!(lines[2].ends_with("Rp 15.000"));
        assert!(lines[3].starts_with(" 2  | Air Mineral"));
        assert!(lines[3].ends_with("Rp 4.500,5"));
        assert!(!table.contains(EMPTY_PLACEHOLDER));
    }

    #[test]
    fn test_modal() {
        assert!(render_modal(&ViewState::List).is_none());

        let creating = render_modal(&ViewState::Creating(ProductForm::empty())).unwrap();
        assert!(creating.starts_with("=== Add Product ==="));
        assert!(creating.contains("[save] Save"));

        let editing = render_modal(&ViewState::Editing {
            id: ProductId(3),
            form: ProductForm {
                name: "Teh Manis".to_string(),
                price: "8000".to_string(),
            },
        })
        .unwrap();
        assert!(editing.starts_with("=== Edit Product ==="));
        assert!(editing.contains("Name  : Teh Manis"));
        assert!(editing.contains("Price : 8000"));
        assert!(editing.contains("[save] Update"));
    }

    #[test]
    fn test_screen_appends_modal() {
        let screen = render_screen(&[], &ViewState::Creating(ProductForm::empty()));
        assert!(screen.contains(EMPTY_PLACEHOLDER));
        assert!(screen.contains("Add Product"));
    }
}
