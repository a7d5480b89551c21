//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 1:1 대응되는 문서 구조를 정의합니다.
//! 현재 영속 엔티티는 `users` 컬렉션의 [`User`](users::user::User) 하나뿐입니다.

pub mod users;
