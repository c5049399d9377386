/////////////////////////////TESTS////////////////////////////////////////////////////
/*
tests of the plot task document parser:
value typing, key-value pairs, sections, whole documents, comments, template filling,
malformed documents, file-based parsing
*/

#[cfg(test)]
mod tests {
    use crate::Utils::task_parser::{
        DocumentMap, Value, filter_comments, parse_document, parse_document_as,
        parse_document_from_file, parse_key, parse_key_value_pair, parse_section, parse_title,
        parse_value, parse_value_list,
    };
    use crate::polynomial::poly_error::PolyError;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_title() {
        let (remaining, title) = parse_title("polynomial\n expression: x").unwrap();
        assert_eq!(title, "polynomial");
        assert_eq!(remaining, "expression: x");

        let (remaining, title) = parse_title("view_2 x_view: 1").unwrap();
        assert_eq!(title, "view_2");
        assert_eq!(remaining, "x_view: 1");
    }

    #[test]
    fn test_parse_key() {
        let (remaining, key) = parse_key("sample_rate: 0.1").unwrap();
        assert_eq!(key, "sample_rate");
        assert_eq!(remaining, ": 0.1");
        assert!(parse_key("1key: 2").is_err());
    }

    #[test]
    fn test_parse_value() {
        let (remaining, value) = parse_value("x^2-2x+3\n").unwrap();
        assert_eq!(value, Value::String("x^2-2x+3".to_string()));
        assert_eq!(remaining, "\n");

        let (remaining, value) = parse_value("-10, 10").unwrap();
        assert_eq!(value, Value::Integer(-10));
        assert_eq!(remaining, ", 10");

        let (_, value) = parse_value("0.25").unwrap();
        assert_eq!(value, Value::Float(0.25));

        let (_, value) = parse_value("false").unwrap();
        assert_eq!(value, Value::Boolean(false));
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Integer(-10).as_f64(), Some(-10.0));
        assert_eq!(Value::Float(0.5).as_f64(), Some(0.5));
        assert_eq!(Value::String("x".to_string()).as_f64(), None);
        assert_eq!(Value::Integer(3).as_integer(), Some(3));
        assert_eq!(Value::Float(3.0).as_integer(), None);
        assert_eq!(Value::Boolean(true).as_boolean(), Some(true));
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
    }

    #[test]
    fn test_parse_value_list() {
        let (remaining, values) = parse_value_list("1, -2.5 ,3").unwrap();
        assert_eq!(
            values,
            vec![Value::Integer(1), Value::Float(-2.5), Value::Integer(3)]
        );
        assert_eq!(remaining, "");

        let (remaining, values) = parse_value_list("").unwrap();
        assert_eq!(values, Vec::<Value>::new());
        assert_eq!(remaining, "");
    }

    #[test]
    fn test_parse_key_value_pair() {
        let (remaining, (key, values)) = parse_key_value_pair("domain : -10, 10\n step: 1").unwrap();
        assert_eq!(key, "domain");
        assert_eq!(values, vec![Value::Integer(-10), Value::Integer(10)]);
        assert_eq!(remaining, "step: 1");

        let (remaining, (key, values)) = parse_key_value_pair("csv: points.csv;").unwrap();
        assert_eq!(key, "csv");
        assert_eq!(values, vec![Value::String("points.csv".to_string())]);
        assert_eq!(remaining, ";");
    }

    #[test]
    fn test_parse_section() {
        let input = "sampling method: adaptive sample_rate: 0.05 precision: 1";
        let (remaining, (title, map)) = parse_section(input).unwrap();
        assert_eq!(title, "sampling");
        assert_eq!(map.len(), 3);
        assert_eq!(
            map.get("method").unwrap(),
            &vec![Value::String("adaptive".to_string())]
        );
        assert_eq!(map.get("sample_rate").unwrap(), &vec![Value::Float(0.05)]);
        assert_eq!(map.get("precision").unwrap(), &vec![Value::Integer(1)]);
        assert_eq!(remaining, "");
    }

    #[test]
    fn test_parse_section_stops_at_next_title() {
        let input = "polynomial\n  expression: x^3\nsampling\n  step: 0.5";
        let (remaining, (title, map)) = parse_section(input).unwrap();
        assert_eq!(title, "polynomial");
        assert_eq!(map.len(), 1);
        assert_eq!(remaining, "sampling\n  step: 0.5");
    }

    #[test]
    fn test_parse_document_basic() {
        let input = "polynomial\n degree: 2\n coefficients: 1, -2, 3\n\nsampling\n method: uniform\n domain: 0, 2\n";
        let (remaining, document) = parse_document(input).unwrap();
        assert_eq!(remaining, "");
        assert_eq!(document.len(), 2);
        assert_eq!(
            document["polynomial"]["coefficients"],
            Some(vec![Value::Integer(1), Value::Integer(-2), Value::Integer(3)])
        );
        assert_eq!(
            document["sampling"]["domain"],
            Some(vec![Value::Integer(0), Value::Integer(2)])
        );
    }

    #[test]
    fn test_filter_comments() {
        let input = "# task\npolynomial\n// the curve\n expression: x\n\n% old\n; note\n";
        assert_eq!(filter_comments(input), "polynomial\n expression: x");
    }

    #[test]
    fn test_parse_document_with_template() {
        let mut template: DocumentMap = HashMap::new();
        let mut view = HashMap::new();
        view.insert("x_view".to_string(), None);
        view.insert("y_view".to_string(), None);
        template.insert("view".to_string(), view);
        let mut polynomial = HashMap::new();
        polynomial.insert("degree".to_string(), None);
        template.insert("polynomial".to_string(), polynomial);

        let input = "# comment\npolynomial\n expression: x^2";
        let document = parse_document_as(input, Some(&template)).unwrap();
        assert_eq!(
            document["polynomial"]["expression"],
            Some(vec![Value::String("x^2".to_string())])
        );
        assert_eq!(document["polynomial"]["degree"], None);
        assert_eq!(document["view"]["x_view"], None);
        assert_eq!(document["view"]["y_view"], None);
    }

    #[test]
    fn test_parse_document_malformed() {
        let res = parse_document_as("polynomial\n expression: x\n invalid structure", None);
        assert!(matches!(res, Err(PolyError::Config(_))));
        let res = parse_document_as("", None);
        assert!(matches!(res, Err(PolyError::Config(_))));
    }

    #[test]
    fn test_parse_document_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "polynomial").unwrap();
        writeln!(file, "    expression: -x^4+3x").unwrap();
        writeln!(file, "logging").unwrap();
        writeln!(file, "    level: debug").unwrap();
        let document = parse_document_from_file(file.path(), None).unwrap();
        assert_eq!(
            document["logging"]["level"],
            Some(vec![Value::String("debug".to_string())])
        );

        let missing = parse_document_from_file("/definitely/not/here.txt", None);
        assert!(matches!(missing, Err(PolyError::Io(_))));
    }
}
