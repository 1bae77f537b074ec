#[derive(Debug)]
pub struct RegisterUserDTO {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginDTO {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct UserDTO {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
}
