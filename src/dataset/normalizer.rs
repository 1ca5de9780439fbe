use super::types::{RawRow, Record};

pub const COL_CUSTOMER_ID: &str = "Customer ID";
pub const COL_CUSTOMER_NAME: &str = "Customer Name";
pub const COL_PHONE_NUMBER: &str = "Phone Number";
pub const COL_GENDER: &str = "Gender";
pub const COL_AGE: &str = "Age";
pub const COL_REGION: &str = "Customer Region";
pub const COL_CUSTOMER_TYPE: &str = "Customer Type";
pub const COL_PRODUCT_ID: &str = "Product ID";
pub const COL_PRODUCT_NAME: &str = "Product Name";
pub const COL_BRAND: &str = "Brand";
pub const COL_CATEGORY: &str = "Product Category";
pub const COL_TAGS: &str = "Tags";
pub const COL_QUANTITY: &str = "Quantity";
pub const COL_PRICE_PER_UNIT: &str = "Price per Unit";
pub const COL_DISCOUNT_PERCENTAGE: &str = "Discount Percentage";
pub const COL_TOTAL_AMOUNT: &str = "Total Amount";
pub const COL_FINAL_AMOUNT: &str = "Final Amount";
pub const COL_DATE: &str = "Date";
pub const COL_PAYMENT_METHOD: &str = "Payment Method";
pub const COL_ORDER_STATUS: &str = "Order Status";
pub const COL_DELIVERY_TYPE: &str = "Delivery Type";
pub const COL_STORE_ID: &str = "Store ID";
pub const COL_STORE_LOCATION: &str = "Store Location";
pub const COL_SALESPERSON_ID: &str = "Salesperson ID";
pub const COL_EMPLOYEE_NAME: &str = "Employee Name";

/// Converts one raw row into a `Record`.
///
/// Never fails: absent columns and malformed numbers fall back to empty / zero.
pub fn normalize_row(row: &RawRow) -> Record {
    Record {
        customer_id: text(row, COL_CUSTOMER_ID),
        customer_name: text(row, COL_CUSTOMER_NAME),
        phone_number: text(row, COL_PHONE_NUMBER),
        gender: text(row, COL_GENDER),
        age: parse_leading_int(field(row, COL_AGE)),
        region: text(row, COL_REGION),
        customer_type: text(row, COL_CUSTOMER_TYPE),
        product_id: text(row, COL_PRODUCT_ID),
        product_name: text(row, COL_PRODUCT_NAME),
        brand: text(row, COL_BRAND),
        category: text(row, COL_CATEGORY),
        tags: split_tags(field(row, COL_TAGS)),
        quantity: parse_leading_int(field(row, COL_QUANTITY)),
        price_per_unit: parse_leading_float(field(row, COL_PRICE_PER_UNIT)),
        discount_percentage: parse_leading_float(field(row, COL_DISCOUNT_PERCENTAGE)),
        total_amount: parse_leading_float(field(row, COL_TOTAL_AMOUNT)),
        final_amount: parse_leading_float(field(row, COL_FINAL_AMOUNT)),
        date: text(row, COL_DATE),
        payment_method: text(row, COL_PAYMENT_METHOD),
        order_status: text(row, COL_ORDER_STATUS),
        delivery_type: text(row, COL_DELIVERY_TYPE),
        store_id: text(row, COL_STORE_ID),
        store_location: text(row, COL_STORE_LOCATION),
        salesperson_id: text(row, COL_SALESPERSON_ID),
        employee_name: text(row, COL_EMPLOYEE_NAME),
    }
}

/// Normalizes a sequence of rows, preserving input order.
pub fn normalize_rows<'a, I>(rows: I) -> Vec<Record>
where
    I: IntoIterator<Item = &'a RawRow>,
{
    rows.into_iter().map(normalize_row).collect()
}

fn field<'a>(row: &'a RawRow, column: &str) -> &'a str {
    row.get(column).map(String::as_str).unwrap_or("")
}

fn text(row: &RawRow, column: &str) -> String {
    field(row, column).trim().to_string()
}

/// Splits a comma-separated tag list, dropping empty pieces. Duplicates are kept.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads the leading integer of `raw` (`"42 yrs"` -> 42, `"3.9"` -> 3).
///
/// Returns 0 when there is no leading integer or when it is negative.
pub fn parse_leading_int(raw: &str) -> u32 {
    let s = raw.trim();
    let (negative, rest) = split_sign(s);
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 || negative {
        return 0;
    }
    rest[..digits_len].parse::<u32>().unwrap_or(u32::MAX)
}

/// Reads the leading decimal number of `raw` (`"12.5%"` -> 12.5, `".5"` -> 0.5, `"1e3"` -> 1000).
///
/// Returns 0.0 when there is no leading number, or when it is negative or not finite.
pub fn parse_leading_float(raw: &str) -> f64 {
    let s = raw.trim();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    match s[..end].parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
