use crate::components::imports::*;

#[derive(Properties, PartialEq)]
pub struct StudentFieldsProps {
    pub draft: StudentDraft,
    pub percentage_ranges: Vec<PercentageRange>,
    pub onchange: Callback<DraftField>,
}

/// Inputs of a student draft, shared by the add and edit forms.
#[function_component]
pub fn StudentFields(props: &StudentFieldsProps) -> Html {
    let StudentFieldsProps {
        draft,
        percentage_ranges,
        onchange,
    } = props;

    let on_name = onchange.reform(|event: InputEvent| DraftField::Name(input_value(&event)));
    let on_age = onchange.reform(|event: InputEvent| DraftField::Age(input_value(&event)));
    let on_address = onchange.reform(|event: InputEvent| DraftField::Address(input_value(&event)));
    let on_range = onchange.reform(|event: Event| {
        DraftField::PercentageRange(select_value(&event).parse().unwrap_or(0))
    });
    let on_active = onchange.reform(|event: Event| DraftField::Active(select_value(&event) == "true"));

    html! {
        <>
            <input type="text" placeholder="Name" value={draft.name.clone()} oninput={on_name}/>
            <input type="number" placeholder="Age" value={draft.age.clone()} oninput={on_age}/>
            <select onchange={on_range}>
                <option value="0" selected={draft.percentage_range_id == 0}>{ "Select Percentage Range" }</option>
                {
                    for percentage_ranges.iter().map(|range| html! {
                        <option
                            key={range.id.to_string()}
                            value={range.id.to_string()}
                            selected={range.id == draft.percentage_range_id}
                        >
                            { &range.label }
                        </option>
                    })
                }
            </select>
            <select onchange={on_active}>
                <option value="true" selected={draft.is_active}>{ "Active" }</option>
                <option value="false" selected={!draft.is_active}>{ "Inactive" }</option>
            </select>
            <input type="text" placeholder="Address" value={draft.address.clone()} oninput={on_address}/>
        </>
    }
}
