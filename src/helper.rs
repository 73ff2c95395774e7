use std::io::BufRead;

use crate::domain::Contact;
use crate::errors::AppError;

pub fn serialize_contacts(contacts: &[Contact]) -> String {
    let mut data = String::new();

    for contact in contacts {
        data.push_str(&format!("{},{}\n", contact.name, contact.phone));
    }
    data
}

/// Parses `name,phone` lines. Any line that does not split into exactly two
/// fields aborts the whole load.
pub fn deserialize_contacts_from_txt_buffer<R: BufRead>(
    buffer: R,
) -> Result<Vec<Contact>, AppError> {
    let mut contacts = Vec::new();

    for (idx, line) in buffer.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        let fields: Vec<&str> = line.split(',').collect();
        let [name, phone] = fields.as_slice() else {
            return Err(AppError::MalformedLine {
                line: idx + 1,
                content: line.to_string(),
            });
        };

        contacts.push(Contact::new(name, phone));
    }

    Ok(contacts)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn check_serialize_contact() {
        let contacts = vec![
            Contact::new("Uche", "012345678901"),
            Contact::new("Mom", "98765432109"),
        ];

        let ser_data = serialize_contacts(&contacts);

        assert_eq!(ser_data, "Uche,012345678901\nMom,98765432109\n".to_string())
    }

    #[test]
    fn check_deserialization_from_buffer() -> Result<(), AppError> {
        let data = "Uche,012345678901\n  Mom,98765432109  \n";

        let contacts = deserialize_contacts_from_txt_buffer(Cursor::new(data))?;

        assert_eq!(
            contacts,
            vec![
                Contact::new("Uche", "012345678901"),
                Contact::new("Mom", "98765432109"),
            ]
        );
        Ok(())
    }

    #[test]
    fn empty_fields_survive_parsing() -> Result<(), AppError> {
        let contacts = deserialize_contacts_from_txt_buffer(Cursor::new("Ghost,\n"))?;

        assert_eq!(contacts, vec![Contact::new("Ghost", "")]);
        Ok(())
    }

    #[test]
    fn extra_comma_is_a_malformed_line() {
        let data = "Alice,111\nBob,222,333\nCarol,444\n";

        let result = deserialize_contacts_from_txt_buffer(Cursor::new(data));

        match result {
            Err(AppError::MalformedLine { line, content }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "Bob,222,333");
            }
            other => panic!("expected malformed line, got {other:?}"),
        }
    }

    #[test]
    fn missing_comma_and_blank_lines_are_malformed() {
        assert!(matches!(
            deserialize_contacts_from_txt_buffer(Cursor::new("Alice 111\n")),
            Err(AppError::MalformedLine { line: 1, .. })
        ));
        assert!(matches!(
            deserialize_contacts_from_txt_buffer(Cursor::new("Alice,111\n\nBob,222\n")),
            Err(AppError::MalformedLine { line: 2, .. })
        ));
    }
}
