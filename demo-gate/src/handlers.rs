use axum::response::Html;

use lion_connect_session_axum::GateRoles;

pub(crate) async fn index(GateRoles(roles): GateRoles) -> Html<String> {
    Html(format!(
        "<h1>Lion Connect</h1><p>roles: {roles:?}</p>\
         <p><a href=\"/talent\">talent</a> | <a href=\"/company\">company</a> | \
         <a href=\"/admin\">admin</a></p>"
    ))
}

pub(crate) async fn login_page() -> Html<&'static str> {
    Html("<h1>Log in</h1><p>POST /auth/login with {email, password}</p>")
}

pub(crate) async fn talent_home() -> Html<&'static str> {
    Html("<h1>Talent dashboard</h1>")
}

pub(crate) async fn company_home() -> Html<&'static str> {
    Html("<h1>Company dashboard</h1>")
}

pub(crate) async fn admin_home() -> Html<&'static str> {
    Html("<h1>Admin console</h1>")
}
