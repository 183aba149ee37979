use crate::components::imports::*;

#[derive(Properties, PartialEq)]
pub struct ErrorScreenProps {
    pub message: AttrValue,
    pub action: AttrValue,
    pub onaction: Callback<MouseEvent>,
}

/// Replaces a view whose data could not be loaded.
#[styled_component]
pub fn ErrorScreen(props: &ErrorScreenProps) -> Html {
    let ErrorScreenProps {
        message,
        action,
        onaction,
    } = props;

    let screen = css! {"
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 16px;
        margin-top: 15vh;

        h2 {
            color: rgb(248 83 20);
        }
    "};

    html! {
        <div class={screen}>
            <h2>{ "Error: " }{ message.clone() }</h2>
            <button type="button" onclick={onaction.clone()}>{ action.clone() }</button>
        </div>
    }
}
