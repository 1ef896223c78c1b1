//! HTML rendering for the console pages.

use std::fmt::Write as _;

use serde::Deserialize;

use crate::client::{ApiOrder, NewApiOrder};

/// Values of the entry form, as submitted or prefilled.
///
/// Every field arrives as text; empty strings mean "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderForm {
    /// Item description.
    #[serde(default)]
    pub items: String,
    /// `YYYY-MM-DD` from a date input.
    #[serde(default)]
    pub order_date: String,
    /// `HH:MM` or `HH:MM:SS` from a time input.
    #[serde(default)]
    pub order_time: String,
    /// Quantity as typed.
    #[serde(default)]
    pub quantity: String,
    /// Present (usually `on`) when the checkbox is ticked.
    #[serde(default)]
    pub on_hand: Option<String>,
    /// Present when the form was prefilled from an order without an
    /// `onHand` value; an unticked box then stays null instead of `false`.
    #[serde(default)]
    pub on_hand_unset: Option<String>,
}

/// The form could not be turned into an API request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("quantity must be a whole number, got '{0}'")]
pub struct FormError(pub String);

impl OrderForm {
    /// Prefill the form from an existing order.
    #[must_use]
    pub fn from_order(order: &ApiOrder) -> Self {
        Self {
            items: order.items.clone().unwrap_or_default(),
            order_date: order.order_date.clone().unwrap_or_default(),
            order_time: order.order_time.clone().unwrap_or_default(),
            quantity: order.quantity.map(|q| q.to_string()).unwrap_or_default(),
            on_hand: order.on_hand.filter(|&b| b).map(|_| "on".to_string()),
            on_hand_unset: order.on_hand.is_none().then(|| "1".to_string()),
        }
    }

    /// Build the create request. Blank text fields become nulls.
    ///
    /// A ticked box is `true`. An unticked box is `false`, or null when the
    /// form came from an order that had no `onHand` value.
    pub fn to_new_order(&self) -> Result<NewApiOrder, FormError> {
        let quantity = match self.quantity.trim() {
            "" => None,
            raw => Some(raw.parse().map_err(|_| FormError(raw.to_string()))?),
        };

        Ok(NewApiOrder {
            items: non_blank(&self.items),
            order_date: non_blank(&self.order_date),
            order_time: non_blank(&self.order_time),
            quantity,
            on_hand: match (&self.on_hand, &self.on_hand_unset) {
                (Some(_), _) => Some(true),
                (None, Some(_)) => None,
                (None, None) => Some(false),
            },
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Escape text for HTML element and attribute content.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| escape(&v.to_string()))
}

/// Render the list page with the entry form.
#[must_use]
pub fn render_index(orders: &[ApiOrder], form: &OrderForm) -> String {
    let mut rows = String::new();
    for order in orders {
        let id = order.order_id;
        let _ = write!(
            rows,
            r#"<tr>
  <td>{id}</td>
  <td><details><summary>{items}</summary>
    Date: {date}<br>Time: {time}<br>Quantity: {quantity}<br>On Hand? : {on_hand}
  </details></td>
  <td><a href="/editOrders/{id}">Edit</a> <a href="/deleteOrders/{id}">Delete</a></td>
</tr>
"#,
            items = or_dash(order.items.as_deref()),
            date = or_dash(order.order_date.as_deref()),
            time = or_dash(order.order_time.as_deref()),
            quantity = or_dash(order.quantity),
            on_hand = or_dash(order.on_hand),
        );
    }

    if orders.is_empty() {
        rows.push_str("<tr><td colspan=\"3\">No orders yet</td></tr>\n");
    }

    let checked = if form.on_hand.is_some() { " checked" } else { "" };
    let on_hand_unset = if form.on_hand_unset.is_some() {
        "\n  <input type=\"hidden\" name=\"onHandUnset\" value=\"1\">"
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Orders</title></head>
<body>
<h1>Orders</h1>
<form method="post" action="/insertOrders">
  <label>Items <input type="text" name="items" maxlength="255" value="{items}"></label>
  <label>Date <input type="date" name="orderDate" value="{date}"></label>
  <label>Time <input type="time" name="orderTime" step="1" value="{time}"></label>
  <label>Quantity <input type="number" name="quantity" min="0" value="{quantity}"></label>
  <label>On hand <input type="checkbox" name="onHand"{checked}></label>{on_hand_unset}
  <button type="submit">Save</button>
</form>
<table>
<thead><tr><th>Id</th><th>Items</th><th></th></tr></thead>
<tbody>
{rows}</tbody>
</table>
</body>
</html>
"#,
        items = escape(&form.items),
        date = escape(&form.order_date),
        time = escape(&form.order_time),
        quantity = escape(&form.quantity),
    )
}

/// Render an error page.
#[must_use]
pub fn render_error(title: &str, message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{title}</title></head>
<body>
<h1>{title}</h1>
<p>{message}</p>
<p><a href="/">Back to orders</a></p>
</body>
</html>
"#,
        title = escape(title),
        message = escape(message),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn widget() -> ApiOrder {
        ApiOrder {
            order_id: 1,
            items: Some("Widget".to_string()),
            order_date: Some("2023-01-01".to_string()),
            order_time: Some("10:00:00".to_string()),
            quantity: Some(5),
            on_hand: Some(true),
        }
    }

    #[test]
    fn escape_html_specials() {
        assert_eq!(
            escape(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }

    #[test]
    fn index_lists_orders_with_actions() {
        let html = render_index(&[widget()], &OrderForm::default());
        assert!(html.contains("Widget"));
        assert!(html.contains(r#"href="/editOrders/1""#));
        assert!(html.contains(r#"href="/deleteOrders/1""#));
        assert!(!html.contains("No orders yet"));
    }

    #[test]
    fn index_escapes_items() {
        let order = ApiOrder {
            items: Some("<script>".to_string()),
            ..widget()
        };
        let html = render_index(&[order], &OrderForm::default());
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn prefilled_form_keeps_every_field() {
        let form = OrderForm::from_order(&widget());
        assert_eq!(form.order_time, "10:00:00");
        assert_eq!(form.quantity, "5");
        assert_eq!(form.on_hand.as_deref(), Some("on"));
        assert!(form.on_hand_unset.is_none());

        let html = render_index(&[], &form);
        assert!(html.contains(r#"value="Widget""#));
        assert!(html.contains(r#"value="10:00:00""#));
        assert!(html.contains(" checked"));
        assert!(!html.contains("onHandUnset"));
    }

    #[test]
    fn edit_round_trip_preserves_untouched_order() {
        let timed = ApiOrder {
            order_time: Some("10:00:45".to_string()),
            ..widget()
        };
        let unset = ApiOrder {
            on_hand: None,
            ..widget()
        };
        let not_on_hand = ApiOrder {
            on_hand: Some(false),
            ..widget()
        };

        for order in [widget(), timed, unset, not_on_hand] {
            let resubmitted = OrderForm::from_order(&order).to_new_order().unwrap();
            assert_eq!(resubmitted.order_time, order.order_time);
            assert_eq!(resubmitted.on_hand, order.on_hand);
            assert_eq!(resubmitted.items, order.items);
            assert_eq!(resubmitted.order_date, order.order_date);
            assert_eq!(resubmitted.quantity, order.quantity);
        }
    }

    #[test]
    fn unset_on_hand_is_carried_in_hidden_field() {
        let form = OrderForm::from_order(&ApiOrder {
            on_hand: None,
            ..widget()
        });

        let html = render_index(&[], &form);

        assert!(html.contains(r#"<input type="hidden" name="onHandUnset" value="1">"#));
        assert!(!html.contains(" checked"));
    }

    #[test]
    fn ticking_box_overrides_unset_marker() {
        let form = OrderForm {
            on_hand: Some("on".to_string()),
            on_hand_unset: Some("1".to_string()),
            ..OrderForm::default()
        };
        assert_eq!(form.to_new_order().unwrap().on_hand, Some(true));
    }

    #[test]
    fn blank_form_fields_become_nulls() {
        let order = OrderForm::default().to_new_order().unwrap();
        assert_eq!(
            order,
            NewApiOrder {
                on_hand: Some(false),
                ..NewApiOrder::default()
            }
        );
    }

    #[test_case("5", Some(5) ; "number")]
    #[test_case(" 7 ", Some(7) ; "padded")]
    #[test_case("", None ; "blank")]
    fn quantity_parsing(raw: &str, expected: Option<i32>) {
        let form = OrderForm {
            quantity: raw.to_string(),
            ..OrderForm::default()
        };
        assert_eq!(form.to_new_order().unwrap().quantity, expected);
    }

    #[test]
    fn non_numeric_quantity_is_form_error() {
        let form = OrderForm {
            quantity: "lots".to_string(),
            ..OrderForm::default()
        };
        assert_eq!(form.to_new_order(), Err(FormError("lots".to_string())));
    }

    #[test]
    fn error_page_escapes_message() {
        let html = render_error("Upstream error", "<bad>");
        assert!(html.contains("&lt;bad&gt;"));
    }
}
