use crate::components::imports::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
}

#[styled_component]
pub fn DefaultStyling(props: &Props) -> Html {
    let global_style = css!(
        "
            body {
                margin: 0;
                font-family: ${font};
                background-color: rgb(245 246 250);
                color: rgb(33 37 41);
            }

            button:disabled {
                opacity: 0.5;
                cursor: not-allowed;
            }
        ",
        font = "system-ui, sans-serif",
    );

    html! {
        <>
            <Global css={global_style}/>
            { for props.children.iter() }
        </>
    }
}
