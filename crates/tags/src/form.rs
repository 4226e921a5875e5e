//! Forms and their controls.

use crate::setters::{flag_setters, value_setters};
use htmlgen_core::{define_element, impl_container_widget};

define_element!(Form => Form, block);
define_element!(
    /// A form control. Void, and never holds children.
    Input => Input, leaf, void
);
define_element!(Button => Button);
define_element!(
    /// A drop-down list. Options start on the line after the open tag.
    Select => Select, open_line
);
define_element!(
    /// An `<option>` inside a [`Select`].
    SelectOption => Option
);
define_element!(Label => Label);
define_element!(Fieldset => Fieldset, block);
define_element!(Legend => Legend);
define_element!(Textarea => Textarea);
define_element!(
    /// Suggestions for an [`Input`] referencing it through `list`.
    Datalist => Datalist, open_line
);
define_element!(Optgroup => Optgroup, open_line);
define_element!(Output => Output);
define_element!(Progress => Progress);
define_element!(Meter => Meter);

impl_container_widget!(
    Form, Button, Select, SelectOption, Label, Fieldset, Legend, Textarea, Datalist, Optgroup,
    Output, Progress, Meter
);

value_setters!(Form {
    action => "action",
    method => "method",
    enctype => "enctype",
    target => "target",
});
flag_setters!(Form {
    novalidate => "novalidate",
});

value_setters!(Input {
    name => "name",
    value => "value",
    placeholder => "placeholder",
    min => "min",
    max => "max",
    step => "step",
    pattern => "pattern",
    autocomplete => "autocomplete",
    /// Id of a `<datalist>` offering suggestions.
    list => "list",
    minlength => "minlength",
    maxlength => "maxlength",
});
flag_setters!(Input {
    disabled => "disabled",
    readonly => "readonly",
    required => "required",
    checked => "checked",
    autofocus => "autofocus",
});

value_setters!(Button {
    name => "name",
    value => "value",
    formaction => "formaction",
    formmethod => "formmethod",
});
flag_setters!(Button {
    disabled => "disabled",
});

value_setters!(Select {
    name => "name",
    /// Number of visible rows.
    size => "size",
});
flag_setters!(Select {
    multiple => "multiple",
    disabled => "disabled",
    required => "required",
});

value_setters!(SelectOption {
    value => "value",
});
flag_setters!(SelectOption {
    selected => "selected",
    disabled => "disabled",
});

value_setters!(Label {
    /// Sets the `for` attribute.
    for_id => "for",
});

value_setters!(Fieldset {
    name => "name",
    /// Sets the `form` attribute.
    form_attr => "form",
});
flag_setters!(Fieldset {
    disabled => "disabled",
});

value_setters!(Textarea {
    name => "name",
    placeholder => "placeholder",
    rows => "rows",
    cols => "cols",
});
flag_setters!(Textarea {
    required => "required",
    readonly => "readonly",
});

value_setters!(Optgroup {
    label => "label",
});
flag_setters!(Optgroup {
    disabled => "disabled",
});

value_setters!(Output {
    /// Sets the `for` attribute.
    for_id => "for",
    name => "name",
    form_attr => "form",
});

value_setters!(Progress {
    value => "value",
    max => "max",
});

value_setters!(Meter {
    value => "value",
    min => "min",
    max => "max",
    low => "low",
    high => "high",
    optimum => "optimum",
});

#[cfg(test)]
mod tests {
    use super::*;
    use htmlgen_core::{ContainerWidget, ElementError, Node, TagKind, Widget};

    #[test]
    fn test_input_is_void_and_leaf() {
        let input = Input::new()
            .type_("email")
            .name("email")
            .placeholder("you@example.com")
            .required();
        assert_eq!(
            input.html(),
            r#"<input type="email" name="email" placeholder="you@example.com" required="required">"#
        );

        let mut input = input;
        assert_eq!(
            input.add("text").unwrap_err(),
            ElementError::NotAContainer { tag: TagKind::Input }
        );
    }

    #[test]
    fn test_select_with_options() {
        let select = Select::new()
            .name("size")
            .child(SelectOption::new().value("s").text("Small"))
            .child(SelectOption::new().value("m").selected().text("Medium"));
        assert_eq!(
            select.html(),
            "<select name=\"size\">\n<option value=\"s\">Small</option>\
             <option value=\"m\" selected=\"selected\">Medium</option></select>"
        );
    }

    #[test]
    fn test_form_layout() {
        let form = Form::new()
            .action("/submit")
            .method("post")
            .child(Label::new().for_id("q").text("Query"))
            .child(Input::new().id("q").name("q"))
            .child(Button::new().type_("submit").text("Go"));
        assert_eq!(
            form.html(),
            "<form action=\"/submit\" method=\"post\">\n\
             <label for=\"q\">Query</label>\
             <input id=\"q\" name=\"q\">\
             <button type=\"submit\">Go</button></form>\n"
        );
    }

    #[test]
    fn test_numeric_setter_values() {
        let input = Input::new().min(0).max(10).step(2).maxlength(3);
        assert_eq!(
            input.element().attrs().other(),
            r#" min="0" max="10" step="2" maxlength="3""#
        );
    }

    #[test]
    fn test_datalist_for_input() {
        let list = Datalist::new()
            .id("langs")
            .child(SelectOption::new().value("rust"))
            .child(SelectOption::new().value("c"));
        assert_eq!(
            list.html(),
            "<datalist id=\"langs\">\n<option value=\"rust\"></option><option value=\"c\"></option></datalist>"
        );
        let input = Input::new().list("langs");
        assert_eq!(input.html(), r#"<input list="langs">"#);
    }

    #[test]
    fn test_optgroups_in_select() {
        let select = Select::new()
            .child(
                Optgroup::new()
                    .label("Fruit")
                    .child(SelectOption::new().text("Apple")),
            )
            .child(Optgroup::new().label("Retired").disabled());
        assert_eq!(
            select.html(),
            "<select>\n<optgroup label=\"Fruit\">\n<option>Apple</option></optgroup>\
             <optgroup label=\"Retired\" disabled=\"disabled\">\n</optgroup></select>"
        );
    }

    #[test]
    fn test_gauges_and_output() {
        let progress = Progress::new().value(0.5).max(1).text("50%");
        assert_eq!(progress.html(), r#"<progress value="0.5" max="1">50%</progress>"#);

        let meter = Meter::new().min(0).max(100).low(20).high(80).optimum(50).value(65);
        assert_eq!(
            meter.html(),
            r#"<meter min="0" max="100" low="20" high="80" optimum="50" value="65"></meter>"#
        );

        let output = Output::new().for_id("a b").name("sum").text("3");
        assert_eq!(output.html(), r#"<output for="a b" name="sum">3</output>"#);
    }
}
