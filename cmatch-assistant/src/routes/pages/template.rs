pub const LOGIN: &'static str = "\
<!DOCTYPE html>\
<html>\
<head>\
<meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>cMatch - Log in</title>\
<link rel=\"stylesheet\" href=\"/static/css/main.css\">\
</head>\
<body>\
<div class=\"auth-form\">\
    <form id=\"login-form\" action=\"{{scope_path}}/api/v1/auth/login\" method=\"post\">\
        <h2>Log in</h2>\
        <div class=\"form-group\">\
            <input type=\"text\" name=\"account\" placeholder=\"Account\" required autofocus>\
        </div>\
        <div class=\"form-group\">\
            <input type=\"password\" name=\"password\" placeholder=\"Password\" required>\
        </div>\
        <div class=\"form-group\">\
            <button type=\"submit\">Log in</button>\
        </div>\
        <p><a href=\"{{scope_path}}/register\">Create an account</a></p>\
    </form>\
</div>\
<script src=\"/static/js/login.js\"></script>\
</body>\
</html>";

pub const REGISTER: &'static str = "\
<!DOCTYPE html>\
<html>\
<head>\
<meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>cMatch - Register</title>\
<link rel=\"stylesheet\" href=\"/static/css/main.css\">\
</head>\
<body>\
<div class=\"auth-form\">\
    <form id=\"register-form\" action=\"{{scope_path}}/api/v1/user\" method=\"post\">\
        <h2>Register</h2>\
        <div class=\"form-group\">\
            <input type=\"text\" name=\"account\" placeholder=\"Account\" required autofocus>\
        </div>\
        <div class=\"form-group\">\
            <input type=\"text\" name=\"name\" placeholder=\"Name\">\
        </div>\
        <div class=\"form-group\">\
            <input type=\"password\" name=\"password\" placeholder=\"Password\" required>\
        </div>\
        <div class=\"form-group\">\
            <button type=\"submit\">Register</button>\
        </div>\
        <p><a href=\"{{scope_path}}/login\">Back to log in</a></p>\
    </form>\
</div>\
<script src=\"/static/js/register.js\"></script>\
</body>\
</html>";

pub const SEARCH: &'static str = "\
<!DOCTYPE html>\
<html>\
<head>\
<meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>cMatch - Search</title>\
<link rel=\"stylesheet\" href=\"/static/css/main.css\">\
</head>\
<body>\
<nav>\
    <a href=\"{{scope_path}}/search\">Search</a>\
    <a href=\"{{scope_path}}/visual\">Visual</a>\
    <a href=\"{{scope_path}}/wishlist\">Wishlist</a>\
    <a href=\"{{scope_path}}/closet\">Closet</a>\
    <a href=\"{{scope_path}}/profile\">Profile</a>\
</nav>\
<div class=\"search-form\">\
    <form id=\"search-form\" data-api=\"{{scope_path}}/api/v1/search/product\">\
        <input type=\"text\" name=\"query\" placeholder=\"What are you looking for?\" required>\
        <input type=\"text\" name=\"brand\" placeholder=\"Brand\">\
        <button type=\"submit\">Search</button>\
    </form>\
</div>\
<div id=\"results\"></div>\
<script src=\"/static/js/search.js\"></script>\
</body>\
</html>";

pub const VISUAL: &'static str = "\
<!DOCTYPE html>\
<html>\
<head>\
<meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>cMatch - Visual search</title>\
<link rel=\"stylesheet\" href=\"/static/css/main.css\">\
</head>\
<body>\
<nav>\
    <a href=\"{{scope_path}}/search\">Search</a>\
    <a href=\"{{scope_path}}/visual\">Visual</a>\
    <a href=\"{{scope_path}}/wishlist\">Wishlist</a>\
    <a href=\"{{scope_path}}/closet\">Closet</a>\
    <a href=\"{{scope_path}}/profile\">Profile</a>\
</nav>\
<div class=\"visual-form\">\
    <form id=\"visual-form\" data-api=\"{{scope_path}}/api/v1/search/visual\" \
data-upload=\"{{scope_path}}/api/v1/image\">\
        <input type=\"url\" name=\"imageUrl\" placeholder=\"Image URL\">\
        <input type=\"file\" name=\"image\" accept=\"image/*\">\
        <button type=\"submit\">Search</button>\
    </form>\
</div>\
<div id=\"results\"></div>\
<script src=\"/static/js/visual.js\"></script>\
</body>\
</html>";

pub const ITEMS: &'static str = "\
<!DOCTYPE html>\
<html>\
<head>\
<meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>cMatch - {{page_title}}</title>\
<link rel=\"stylesheet\" href=\"/static/css/main.css\">\
</head>\
<body>\
<nav>\
    <a href=\"{{scope_path}}/search\">Search</a>\
    <a href=\"{{scope_path}}/visual\">Visual</a>\
    <a href=\"{{scope_path}}/wishlist\">Wishlist</a>\
    <a href=\"{{scope_path}}/closet\">Closet</a>\
    <a href=\"{{scope_path}}/profile\">Profile</a>\
</nav>\
<h2>{{page_title}}</h2>\
<div id=\"items\" data-api=\"{{scope_path}}/api/v1/item\" data-kind=\"{{kind}}\"></div>\
<script src=\"/static/js/items.js\"></script>\
</body>\
</html>";

pub const PROFILE: &'static str = "\
<!DOCTYPE html>\
<html>\
<head>\
<meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>cMatch - Profile</title>\
<link rel=\"stylesheet\" href=\"/static/css/main.css\">\
</head>\
<body>\
<nav>\
    <a href=\"{{scope_path}}/search\">Search</a>\
    <a href=\"{{scope_path}}/visual\">Visual</a>\
    <a href=\"{{scope_path}}/wishlist\">Wishlist</a>\
    <a href=\"{{scope_path}}/closet\">Closet</a>\
    <a href=\"{{scope_path}}/profile\">Profile</a>\
</nav>\
<div id=\"profile\" data-api=\"{{scope_path}}/api/v1/user\"></div>\
<script src=\"/static/js/profile.js\"></script>\
</body>\
</html>";
