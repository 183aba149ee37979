use crate::components::imports::*;

#[derive(Properties, PartialEq)]
pub struct StudentsTableProps {
    pub students: Vec<Student>,
    /// Only rows owned by this admin get enabled actions.
    pub admin_id: AttrValue,
    pub onedit: Callback<StudentId>,
    pub ondelete: Callback<StudentId>,
}

#[styled_component]
pub fn StudentsTable(props: &StudentsTableProps) -> Html {
    let StudentsTableProps {
        students,
        admin_id,
        onedit,
        ondelete,
    } = props;

    if students.is_empty() {
        return html! { <p>{ "No students found." }</p> };
    }

    let table = css! {"
        width: 100%;
        border-collapse: collapse;

        th, td {
            padding: 6px 10px;
            text-align: left;
            border-bottom: 1px solid rgb(200 200 200);
        }
    "};

    let rows = students.iter().map(|student| {
        let id = student.id;
        let owned = student.owned_by(admin_id);

        let onedit = onedit.reform(move |_: MouseEvent| id);
        let ondelete = ondelete.reform(move |_: MouseEvent| id);

        html! {
            <tr key={id.to_string()}>
                <td>{ &student.name }</td>
                <td>{ student.age.to_string() }</td>
                <td>{ &student.address }</td>
                <td>{ student.percentage_range_label() }</td>
                <td>{ if student.is_active { "Active" } else { "Inactive" } }</td>
                <td>{ student.owner_name() }</td>
                <td>
                    <button type="button" disabled={!owned} onclick={onedit}>{ "Edit" }</button>
                    <button type="button" disabled={!owned} onclick={ondelete}>{ "Delete" }</button>
                </td>
            </tr>
        }
    });

    html! {
        <table class={table}>
            <thead>
                <tr>
                    <th>{ "Name" }</th>
                    <th>{ "Age" }</th>
                    <th>{ "Address" }</th>
                    <th>{ "Percentage" }</th>
                    <th>{ "Status" }</th>
                    <th>{ "Created By" }</th>
                    <th>{ "Actions" }</th>
                </tr>
            </thead>
            <tbody>{ for rows }</tbody>
        </table>
    }
}
