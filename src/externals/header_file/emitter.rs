use crate::models::lookup_table::LookupTable;

/// Name of the length constant in the generated header.
pub const LENGTH_CONSTANT: &str = "TEMPERATURE_LOOKUP_LENGTH";

/// Name of the array in the generated header.
pub const ARRAY_NAME: &str = "temperature_lookup";

/// C element type. Wide enough for any table the constants allow.
pub const ELEMENT_TYPE: &str = "uint16_t";

const VALUES_PER_LINE: usize = 10;

/// Render `table` as a C header.
///
/// Elements are separated by `, ` and wrapped after every tenth one. The last
/// element has no comma and is followed by the closing `};`.
pub fn emit(table: &LookupTable) -> String {
    let length = table.len();
    let mut out = String::new();

    out.push_str("/* temperature_table.h\n");
    out.push_str(" *\n");
    out.push_str(" * Temperature to ADC value lookup tables.\n");
    out.push_str(" * This file was generated by thermistor_table_generator.\n");
    out.push_str(" */\n");
    out.push('\n');
    out.push_str("#include <stdint.h>\n");
    out.push('\n');
    out.push_str(&format!("#define {} {}\n", LENGTH_CONSTANT, length));
    out.push('\n');
    out.push_str(&format!(
        "static const {} {}[{}] = {{\n",
        ELEMENT_TYPE, ARRAY_NAME, length
    ));

    for (index, value) in table.values().iter().enumerate() {
        out.push_str(&value.to_string());
        if index != length - 1 {
            out.push(',');
        }
        if index % VALUES_PER_LINE == VALUES_PER_LINE - 1 {
            out.push('\n');
        } else {
            out.push(' ');
        }
    }

    out.push_str("};\n");
    out.push('\n');
    out
}
