use super::escape_html;

/// Single-line input rendered inside a labelled form item.
pub struct TextField<'a> {
    pub label: &'a str,
    pub name: &'a str,
    pub value: &'a str,
    pub input_type: &'a str,
    pub required: bool,
    pub maxlength: Option<u32>,
    pub description: Option<&'a str>,
    pub error: Option<&'a str>,
}

impl TextField<'_> {
    pub fn render(&self) -> String {
        let id = control_id(self.name);
        let maxlength = match self.maxlength {
            Some(n) => format!(" maxlength=\"{n}\""),
            None => String::new(),
        };

        format!(
            "<div class=\"form-item\">\n\
             {label}\
             <input type=\"{input_type}\" id=\"{id}\" name=\"{name}\" value=\"{value}\"{maxlength}{required}{class}>\n\
             {description}{error}</div>\n",
            label = label_html(&id, self.label, self.required),
            input_type = self.input_type,
            name = self.name,
            value = escape_html(self.value),
            required = required_attr(self.required),
            class = error_class(self.error),
            description = description_html(self.description),
            error = error_html(self.error),
        )
    }
}

/// Dropdown with a placeholder option and (value, label) choices.
pub struct SelectField<'a> {
    pub label: &'a str,
    pub name: &'a str,
    pub placeholder: &'a str,
    pub options: &'a [(String, String)],
    pub selected: Option<&'a str>,
    pub required: bool,
    pub description: Option<&'a str>,
    pub error: Option<&'a str>,
}

impl SelectField<'_> {
    pub fn render(&self) -> String {
        let id = control_id(self.name);
        let mut options = format!(
            "    <option value=\"\">{}</option>\n",
            escape_html(self.placeholder)
        );
        for (value, label) in self.options {
            let selected = if self.selected == Some(value.as_str()) {
                " selected"
            } else {
                ""
            };
            options.push_str(&format!(
                "    <option value=\"{}\"{selected}>{}</option>\n",
                escape_html(value),
                escape_html(label)
            ));
        }

        format!(
            "<div class=\"form-item\">\n\
             {label}\
             <select id=\"{id}\" name=\"{name}\"{required}{class}>\n{options}  </select>\n\
             {description}{error}</div>\n",
            label = label_html(&id, self.label, self.required),
            name = self.name,
            required = required_attr(self.required),
            class = error_class(self.error),
            description = description_html(self.description),
            error = error_html(self.error),
        )
    }
}

/// Checkbox with the label to its right.
pub struct CheckboxField<'a> {
    pub label: &'a str,
    pub name: &'a str,
    pub checked: bool,
    pub description: Option<&'a str>,
}

impl CheckboxField<'_> {
    pub fn render(&self) -> String {
        let id = control_id(self.name);
        let checked = if self.checked { " checked" } else { "" };
        format!(
            "<div class=\"form-item\">\n\
             <label for=\"{id}\"><input type=\"checkbox\" id=\"{id}\" name=\"{name}\" value=\"1\"{checked}> {label}</label>\n\
             {description}</div>\n",
            name = self.name,
            label = escape_html(self.label),
            description = description_html(self.description),
        )
    }
}

fn control_id(name: &str) -> String {
    format!("edit-{}", name.replace('_', "-"))
}

fn label_html(id: &str, label: &str, required: bool) -> String {
    let marker = if required {
        " <span class=\"required-marker\">*</span>"
    } else {
        ""
    };
    format!("<label for=\"{id}\">{}{marker}</label>\n", escape_html(label))
}

fn required_attr(required: bool) -> &'static str {
    if required {
        " required"
    } else {
        ""
    }
}

fn error_class(error: Option<&str>) -> &'static str {
    if error.is_some() {
        " class=\"error\""
    } else {
        ""
    }
}

fn error_html(error: Option<&str>) -> String {
    match error {
        Some(message) => format!(
            "<div class=\"field-error\">{}</div>\n",
            escape_html(message)
        ),
        None => String::new(),
    }
}

fn description_html(description: Option<&str>) -> String {
    match description {
        Some(text) => format!("<div class=\"description\">{}</div>\n", escape_html(text)),
        None => String::new(),
    }
}
